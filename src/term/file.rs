use crate::error;
use crate::lang::Error;
use crate::mach::Program;
use log::debug;
use std::fs::File;
use std::io::{ErrorKind, Write};

type Result<T> = std::result::Result<T, Error>;

fn is_url(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn fetch(path: &str) -> Result<String> {
    if is_url(path) {
        debug!("fetching {}", path);
        return reqwest::blocking::get(path)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| match e.status() {
                Some(status) if status.as_u16() == 404 => error!(FileNotFound; path),
                _ => error!(IoError; &e.to_string()),
            });
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => error!(FileNotFound; path),
        _ => error!(IoError; &e.to_string()),
    })
}

/// Reads a program from a file or an `http://` or `https://` URL.
pub fn load(path: &str) -> Result<Program> {
    let text = fetch(path)?;
    let mut program = Program::new();
    for (index, line) in text.lines().enumerate() {
        if let Err(error) = program.load_str(line) {
            return Err(error.message(&format!("LINE {} OF {}", index + 1, path)));
        }
    }
    debug!("read {} lines from {}", program.len(), path);
    Ok(program)
}

/// Writes the listing of `program`, one line per line.
pub fn save(program: &Program, path: &str) -> Result<()> {
    if program.is_empty() {
        return Err(error!(IoError; "NOTHING TO SAVE"));
    }
    let mut file = File::create(path).map_err(|e| error!(IoError; &e.to_string()))?;
    for (_, line) in program.list(0) {
        writeln!(file, "{}", line).map_err(|e| error!(IoError; &e.to_string()))?;
    }
    debug!("saved {} lines to {}", program.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_is_url() {
        assert!(is_url("http://example.com/a.bas"));
        assert!(is_url("HTTPS://example.com/a.bas"));
        assert!(!is_url("a.bas"));
    }

    #[test]
    fn test_load_cites_file_line() {
        let path = std::env::temp_dir().join("trs80_file_direct.bas");
        std::fs::write(&path, "10 PRINT 1\r\n\nPRINT 2\n").unwrap();
        let path = path.to_string_lossy().to_string();
        let e = load(&path).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DirectStatementInFile);
        assert!(e.to_string().ends_with(&format!("; LINE 3 OF {}", path)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("trs80_file_round.bas");
        let path = path.to_string_lossy().to_string();
        let mut program = Program::new();
        program.load_str("20 print \"b\"").unwrap();
        program.load_str("10 a=1").unwrap();
        save(&program, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "10 a=1\n20 print \"b\"\n"
        );
        assert_eq!(load(&path).unwrap().len(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_nothing() {
        let e = save(&Program::new(), "unused.bas").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IoError);
    }
}
