use std::collections::HashMap;

use crate::error::EnvError;

pub fn parse_env_file(path: &str) -> Result<Vec<(String, String)>, EnvError> {
    let content = std::fs::read_to_string(path).map_err(|source| EnvError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_env_str(&content)
}

pub fn parse_env_str(content: &str) -> Result<Vec<(String, String)>, EnvError> {
    let mut out = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (k, v) = line.split_once('=').ok_or_else(|| EnvError::Parse {
            line: idx + 1,
            reason: "expected KEY=VALUE".to_string(),
        })?;
        let key = k.trim();
        if key.is_empty() {
            return Err(EnvError::Parse {
                line: idx + 1,
                reason: "empty key".to_string(),
            });
        }
        let value = parse_env_value(v.trim(), idx + 1)?;
        out.push((key.to_string(), value));
    }

    Ok(out)
}

fn parse_env_value(value: &str, line_no: usize) -> Result<String, EnvError> {
    let mut chars = value.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back()) {
        if (first == '"' && last == '"') || (first == '\'' && last == '\'') {
            let inner = &value[1..value.len() - 1];
            return unescape_env_value(inner, line_no);
        }
    }
    Ok(value.to_string())
}

fn unescape_env_value(value: &str, line_no: usize) -> Result<String, EnvError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let Some(next) = chars.next() else {
            return Err(EnvError::Parse {
                line: line_no,
                reason: "trailing backslash".to_string(),
            });
        };
        match next {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Variables from the `.env` file, with the process environment taking precedence.
#[derive(Debug, Clone, Default)]
pub struct ScriptEnv {
    vars: HashMap<String, String>,
}

impl ScriptEnv {
    /// A missing `.env` file is not an error; the process environment may carry everything.
    pub fn load(env_file: &str) -> Result<Self, EnvError> {
        let file_vars = match parse_env_file(env_file) {
            Ok(v) => v,
            Err(EnvError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(env_file, "no env file, using process environment only");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::from_parts(file_vars, std::env::vars()))
    }

    pub fn from_parts(
        file_vars: impl IntoIterator<Item = (String, String)>,
        process_vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut vars: HashMap<String, String> = file_vars.into_iter().collect();
        vars.extend(process_vars);
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Values for every name, or one error listing all that are unset.
    pub fn require(&self, names: &[&str]) -> Result<Vec<String>, EnvError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|n| self.get(n).is_none())
            .map(|n| n.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(EnvError::Missing(missing));
        }
        Ok(names
            .iter()
            .filter_map(|n| self.get(n).map(str::to_string))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_escapes_and_comments() {
        let raw = "# operator\nOPERATOR_ACCOUNT_ID=0.0.1001\n\nRPC_URL=\"http://localhost:7546\\n\"\nexport KEY='a\\'b'\n";
        let vars = parse_env_str(raw).unwrap();
        assert_eq!(
            vars,
            vec![
                ("OPERATOR_ACCOUNT_ID".to_string(), "0.0.1001".to_string()),
                ("RPC_URL".to_string(), "http://localhost:7546\n".to_string()),
                ("KEY".to_string(), "a'b".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_lines_without_equals() {
        let err = parse_env_str("A=1\nnonsense\n").unwrap_err();
        assert!(matches!(err, EnvError::Parse { line: 2, .. }));
    }

    #[test]
    fn process_env_wins_and_missing_are_listed() {
        let env = ScriptEnv::from_parts(
            vec![
                ("OPERATOR_ACCOUNT_ID".to_string(), "0.0.1".to_string()),
                ("ACCOUNT_1_PRIVATE_KEY".to_string(), "".to_string()),
            ],
            vec![("OPERATOR_ACCOUNT_ID".to_string(), "0.0.2".to_string())],
        );
        assert_eq!(env.get("OPERATOR_ACCOUNT_ID"), Some("0.0.2"));

        let err = env
            .require(&[
                "OPERATOR_ACCOUNT_ID",
                "OPERATOR_ACCOUNT_PRIVATE_KEY",
                "ACCOUNT_1_PRIVATE_KEY",
            ])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "must set OPERATOR_ACCOUNT_PRIVATE_KEY, ACCOUNT_1_PRIVATE_KEY environment variables"
        );
    }

    #[test]
    fn missing_env_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        assert!(ScriptEnv::load(&path.to_string_lossy()).is_ok());
    }
}
