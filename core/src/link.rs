//! Link builders: deep links back into the editor and "open in app" links
//! for the companion task application.

use std::path::Path;

/// Deep link to a file location, `{scheme}://file/{absolute_path}:{line}`.
/// Line numbers are 1-based.
pub fn file_link(editor_scheme: &str, path: &Path, line: u32) -> String {
    format!("{}://file/{}:{}", editor_scheme, path.display(), line)
}

pub fn task_link(app_scheme: &str, task_id: &str) -> String {
    format!("{}://task?id={}", app_scheme, task_id)
}

pub fn project_link(app_scheme: &str, project_id: &str) -> String {
    format!("{}://project?id={}", app_scheme, project_id)
}

/// Hands a URL to the platform opener. Fire-and-forget: the opener is
/// spawned and not waited on.
pub fn open_external(url: &str) -> std::io::Result<()> {
    tracing::debug!(target: "todocap.link", stage = "open", url = %url);

    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = std::process::Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(url);
        c
    };

    cmd.stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_link_format() {
        let link = file_link("vscode", Path::new("/home/me/notes.md"), 12);
        assert_eq!(link, "vscode://file//home/me/notes.md:12");
    }

    #[test]
    fn test_task_and_project_links() {
        assert_eq!(task_link("todoist", "t1"), "todoist://task?id=t1");
        assert_eq!(project_link("todoist", "p1"), "todoist://project?id=p1");
    }
}
