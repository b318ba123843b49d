//! Persistent session cookie store.
//!
//! The backend session is cookie-based; a browser keeps those cookies
//! between page loads, so the CLI keeps them between invocations. This is
//! a minimal store scoped to the single backend origin: it keeps
//! `name=value` pairs, ignores path/domain/expiry attributes, and treats a
//! cookie set to an empty value as a deletion (the shape the backend uses
//! to clear a session on logout).
//!
//! Persisted as JSON at `~/.pulse/cookies.json`, `0600` on unix. File
//! failures are logged and the store degrades to in-memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use reqwest::header::HeaderValue;

const COOKIES_FILE_NAME: &str = "cookies.json";

/// Cookie store shared between the reqwest client and the CSRF echo.
#[derive(Debug)]
pub struct SessionCookieJar {
    path: Option<PathBuf>,
    cookies: Mutex<BTreeMap<String, String>>,
}

impl SessionCookieJar {
    /// In-memory store, for tests and one-shot use.
    #[must_use]
    pub const fn ephemeral() -> Self {
        Self {
            path: None,
            cookies: Mutex::new(BTreeMap::new()),
        }
    }

    /// Store persisted at the default location (`~/.pulse/cookies.json`).
    /// Falls back to in-memory when no home directory can be resolved.
    #[must_use]
    pub fn persistent() -> Self {
        match default_path() {
            Some(path) => Self::at_path(path),
            None => {
                tracing::warn!("home directory not found; session cookies will not persist");
                Self::ephemeral()
            }
        }
    }

    /// Store persisted at an explicit path, loading any existing contents.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        let cookies = load_file(&path).unwrap_or_default();
        Self {
            path: Some(path),
            cookies: Mutex::new(cookies),
        }
    }

    /// Current value of a cookie, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    /// Drop all cookies and remove the persisted file.
    pub fn clear(&self) {
        self.lock().clear();
        if let Some(path) = &self.path
            && path.exists()
            && let Err(error) = fs::remove_file(path)
        {
            tracing::warn!(%error, path = %path.display(), "failed to remove cookie file");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, cookies: &BTreeMap<String, String>) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(error) = store_file(path, cookies) {
            tracing::warn!(%error, path = %path.display(), "failed to persist cookies");
        }
    }
}

impl reqwest::cookie::CookieStore for SessionCookieJar {
    fn set_cookies(
        &self,
        cookie_headers: &mut dyn Iterator<Item = &HeaderValue>,
        _url: &reqwest::Url,
    ) {
        let mut cookies = self.lock();
        for header in cookie_headers {
            let Ok(raw) = header.to_str() else {
                continue;
            };
            let pair = raw.split(';').next().unwrap_or_default();
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() {
                continue;
            }
            if value.is_empty() {
                cookies.remove(name);
            } else {
                cookies.insert(name.to_string(), value.to_string());
            }
        }
        self.persist(&cookies);
    }

    fn cookies(&self, _url: &reqwest::Url) -> Option<HeaderValue> {
        let cookies = self.lock();
        if cookies.is_empty() {
            return None;
        }
        let header = cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&header).ok()
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pulse").join(COOKIES_FILE_NAME))
}

fn load_file(path: &Path) -> Option<BTreeMap<String, String>> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(cookies) => Some(cookies),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable cookie file");
            None
        }
    }
}

fn store_file(path: &Path, cookies: &BTreeMap<String, String>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }
    fs::write(path, serde_json::to_string(cookies).unwrap_or_default())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reqwest::cookie::CookieStore as _;

    use super::*;

    fn url() -> reqwest::Url {
        reqwest::Url::parse("http://localhost:8080/api").expect("valid url")
    }

    fn set(jar: &SessionCookieJar, headers: &[&str]) {
        let values: Vec<HeaderValue> = headers
            .iter()
            .map(|h| HeaderValue::from_str(h).expect("valid header"))
            .collect();
        jar.set_cookies(&mut values.iter(), &url());
    }

    #[test]
    fn stores_and_serves_cookies() {
        let jar = SessionCookieJar::ephemeral();
        set(
            &jar,
            &[
                "SESSION=abc123; Path=/; HttpOnly",
                "XSRF-TOKEN=tok-1; Path=/",
            ],
        );

        assert_eq!(jar.get("SESSION").as_deref(), Some("abc123"));
        assert_eq!(jar.get("XSRF-TOKEN").as_deref(), Some("tok-1"));

        let header = jar.cookies(&url()).expect("cookie header");
        assert_eq!(header.to_str().unwrap(), "SESSION=abc123; XSRF-TOKEN=tok-1");
    }

    #[test]
    fn empty_value_deletes_the_cookie() {
        let jar = SessionCookieJar::ephemeral();
        set(&jar, &["SESSION=abc123"]);
        set(&jar, &["SESSION=; Max-Age=0"]);
        assert_eq!(jar.get("SESSION"), None);
        assert!(jar.cookies(&url()).is_none());
    }

    #[test]
    fn round_trips_through_the_persisted_file() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("cookies.json");

        let jar = SessionCookieJar::at_path(path.clone());
        set(&jar, &["SESSION=persisted-1"]);
        drop(jar);

        let reloaded = SessionCookieJar::at_path(path.clone());
        assert_eq!(reloaded.get("SESSION").as_deref(), Some("persisted-1"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "cookie file should be 0600");
        }
    }

    #[test]
    fn clear_removes_cookies_and_file() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("cookies.json");

        let jar = SessionCookieJar::at_path(path.clone());
        set(&jar, &["SESSION=gone-soon"]);
        assert!(path.exists());

        jar.clear();
        assert_eq!(jar.get("SESSION"), None);
        assert!(!path.exists());
    }

    #[test]
    fn malformed_headers_are_ignored() {
        let jar = SessionCookieJar::ephemeral();
        set(&jar, &["not-a-cookie", "=nameless", "OK=yes"]);
        assert_eq!(jar.get("OK").as_deref(), Some("yes"));
        let header = jar.cookies(&url()).expect("cookie header");
        assert_eq!(header.to_str().unwrap(), "OK=yes");
    }
}
