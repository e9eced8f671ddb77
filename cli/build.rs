fn main() {
    // Only embed resources on Windows
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();

        // Get version from Cargo environment variables
        let version = env!("CARGO_PKG_VERSION");
        let major: Vec<&str> = version.split('.').collect();
        let version_string = format!(
            "{}.{}.{}.0",
            major.first().unwrap_or(&"0"),
            major.get(1).unwrap_or(&"0"),
            major.get(2).unwrap_or(&"0")
        );

        res.set("ProductName", "todocap")
            .set(
                "FileDescription",
                "Quick-capture tasks to a Todoist-style API from the terminal",
            )
            .set("FileVersion", &version_string)
            .set("ProductVersion", version);

        if let Err(e) = res.compile() {
            eprintln!("Warning: Failed to compile Windows resources: {}", e);
        }
    }
}
