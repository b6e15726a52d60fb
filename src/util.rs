use dialog::DialogBox;

/// Show a plain message box. Failures to display are ignored (no dialog backend, headless session).
pub fn msg(title: &str, contents: &str) {
    let _ = dialog::Message::new(contents).title(title).show();
}

/// Platform tag matched against each shim's platform list
pub fn current_platform() -> &'static str {
    std::env::consts::OS
}
