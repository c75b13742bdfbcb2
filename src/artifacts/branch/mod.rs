pub mod branch_name;
pub mod revision;

/// Names git refuses for branches, plus a leading `-` so a stored name can
/// never be read back as a command-line option.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^-|^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const REF_ALIASES: [(&str, &str); 1] = [("@", "HEAD")];
