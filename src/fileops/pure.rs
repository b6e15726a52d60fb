// Pure glob helpers (no I/O)

use regex::{Regex, RegexBuilder};
use std::path::{Component, Path};

/// Compiled save-file pattern.
///
/// Matching is done per path segment the same way shell globs work:
/// `*` and `?` never cross a `/`, `[abc]` / `[!abc]` are character classes
/// and `\` escapes the next character. On Windows matching ignores case, like
/// the filesystem the saves live on.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    regex: Regex,
    depth: usize,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, String> {
        let pattern = pattern.trim_start_matches("./");
        if pattern.is_empty() {
            return Err("empty pattern".to_string());
        }

        let regex = RegexBuilder::new(&glob_to_regex(pattern)?)
            .case_insensitive(cfg!(windows))
            .build()
            .map_err(|e| e.to_string())?;
        let depth = pattern.split('/').filter(|s| !s.is_empty()).count();
        Ok(Self { regex, depth })
    }

    /// Number of path segments a match has
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Match against a `/`-separated path relative to the glob root
    pub fn matches(&self, rel_path: &str) -> bool {
        self.regex.is_match(rel_path)
    }
}

/// Translate a glob into an anchored regex
pub fn glob_to_regex(pattern: &str) -> Result<String, String> {
    let mut out = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| format!("trailing escape in {:?}", pattern))?;
                out.push_str(&regex::escape(&escaped.to_string()));
            }
            '[' => {
                let mut class = String::from("[");
                if matches!(chars.peek(), Some('!') | Some('^')) {
                    chars.next();
                    class.push('^');
                }
                let mut closed = false;
                let mut empty = true;
                while let Some(cc) = chars.next() {
                    match cc {
                        ']' if !empty => {
                            closed = true;
                            break;
                        }
                        '\\' => {
                            let escaped = chars
                                .next()
                                .ok_or_else(|| format!("trailing escape in {:?}", pattern))?;
                            class.push_str(&regex::escape(&escaped.to_string()));
                        }
                        '/' => return Err(format!("separator inside class in {:?}", pattern)),
                        '[' | '&' | '~' => {
                            class.push('\\');
                            class.push(cc);
                        }
                        _ => class.push(cc),
                    }
                    empty = false;
                }
                if !closed {
                    return Err(format!("unterminated class in {:?}", pattern));
                }
                class.push(']');
                out.push_str(&class);
            }
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }

    out.push('$');
    Ok(out)
}

/// Path rendered with `/` separators, as stored in archives and reports.
///
/// `.` components are dropped, so `./compatibility/crashlogs/x.dmp` becomes
/// `compatibility/crashlogs/x.dmp`.
pub fn to_slash_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}
