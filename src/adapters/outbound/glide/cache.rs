use std::env;
use std::path::PathBuf;
use url::Url;

/// Default location of glide's repository cache
///
/// `$GLIDE_HOME/cache` if set, otherwise `~/.glide/cache`.
pub fn default_cache_root() -> Option<PathBuf> {
    if let Some(glide_home) = env::var_os("GLIDE_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(glide_home).join("cache"));
    }
    dirs::home_dir().map(|home| home.join(".glide").join("cache"))
}

/// Matches `user@host:path`, where user is `[A-Za-z0-9_]+` and host is `[A-Za-z0-9._-]+`
fn parse_scp_like(remote: &str) -> Option<(&str, &str, &str)> {
    let (user, rest) = remote.split_once('@')?;
    let (host, path) = rest.split_once(':')?;

    let user_ok = !user.is_empty() && user.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !user_ok || !host_ok {
        return None;
    }
    Some((user, host, path))
}

fn url_key(url: &Url, remote: &str) -> String {
    let mut key = format!("{}-", url.scheme());
    if !url.username().is_empty() {
        key.push_str(url.username());
        key.push('-');
    }
    key.push_str(url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        key.push_str(&format!(":{}", port));
    }

    // Special schemes report an empty path as "/"
    if url.path() != "/" || remote.ends_with('/') {
        key.push_str(url.path());
    }
    key
}

/// Directory name glide uses for `remote` under `<cache root>/src`
///
/// # Examples
/// ```
/// use lock_transitive::adapters::outbound::glide::cache_key;
///
/// assert_eq!(
///     cache_key("https://github.com/tendermint/go-wire"),
///     "https-github.com-tendermint-go-wire"
/// );
/// assert_eq!(cache_key("git@github.com:user/repo"), "git-github.com-user-repo");
/// ```
pub fn cache_key(remote: &str) -> String {
    // scp-like remotes drop the scheme
    let key = match parse_scp_like(remote) {
        Some((user, host, path)) => format!("{}-{}/{}", user, host, path),
        None => match Url::parse(remote) {
            Ok(url) => url_key(&url, remote),
            // Not a URL: keyed by the path alone
            Err(_) => remote.to_string(),
        },
    };

    key.replace(['/', ':'], "-")
}
