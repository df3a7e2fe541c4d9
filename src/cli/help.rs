/// The information panels shown from the mapping form
pub fn get_help_message() -> String {
    r#"
=== About ===
FontRemap batch-changes font families and weights across an entire project.
It finds every unique font used by text layers and lets you map each one to
a replacement.

=== How To Use ===
A Font ID is the exact name the renderer uses for a font. It includes both
the font family and the style (e.g. Bold, Light). If the family is 'Arial'
and the weight is 'Bold', the Font ID is 'Arial-Bold'. If the family is
'Times New Roman' and the style is 'Italic', it is 'TimesNewRoman-Italic';
for 'Bold Italic' it is 'TimesNewRoman-Bold-Italic'.
Note: match capitalization and spacing exactly.

For each used font, type the replacement Font ID and press Enter, or press
Enter alone to keep the current value.
    fonts [filter]   list available fonts, optionally filtered
    ?                show this help
    cancel           close without changing anything

=== FAQ ===
Q: Can I change only some fonts?
A: Yes. Any font you leave unchanged stays as it is.

Q: Can I change the font only in specific compositions or layers?
A: No. Remapping always applies to the entire project.
"#
    .to_string()
}
