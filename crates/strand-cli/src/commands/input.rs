use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Command input and where it came from.
#[derive(Debug)]
pub struct Input {
    pub text: String,
    /// File path shown in diagnostics. None for inline text.
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use a FILE argument or {flag}")]
    Missing { flag: &'static str },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },
}

/// Inline text wins over a path; `-` reads stdin.
pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    flag: &'static str,
) -> Result<Input, InputError> {
    if let Some(text) = text {
        return Ok(Input {
            text: text.to_string(),
            path: None,
        });
    }

    let Some(path) = path else {
        return Err(InputError::Missing { flag });
    };

    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(InputError::Stdin)?;
        return Ok(Input {
            text,
            path: Some("<stdin>".to_string()),
        });
    }

    let display = path.to_string_lossy().into_owned();
    match fs::read_to_string(path) {
        Ok(text) => Ok(Input {
            text,
            path: Some(display),
        }),
        Err(source) => Err(InputError::File {
            path: display,
            source,
        }),
    }
}

pub fn load_or_exit(path: Option<&Path>, text: Option<&str>, flag: &'static str) -> Input {
    match load_input(path, text, flag) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
