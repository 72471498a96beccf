use git_version::git_version;
use target_info::Target;

lazy_static::lazy_static! {
    pub static ref SHORT_VERSION: String = VERSION.replace("Corvid/", "");
}

/// Returns the current version of this build of Corvid.
///
/// A plus-sign (`+`) is appended to the git commit if the tree is dirty.
/// Commit hash is omitted if the sources don't include git information.
///
/// ## Example
///
/// `Corvid/v0.0.1-67da032+`
pub const VERSION: &str = git_version!(
    args = [
        "--always",
        "--dirty=+",
        "--abbrev=7",
        // NOTE: using --match instead of --exclude for compatibility with old Git
        "--match=thiswillnevermatchlol"
    ],
    prefix = "Corvid/v0.0.1-",
    fallback = "Corvid/v0.0.1"
);

/// Sent as the `User-Agent` of requests to access nodes.
///
/// ## Example
///
/// `corvid/v0.0.1-67da032+ (x86_64-linux)`
pub fn user_agent() -> String {
    format!("corvid/{} ({}-{})", SHORT_VERSION.as_str(), Target::arch(), Target::os())
}
