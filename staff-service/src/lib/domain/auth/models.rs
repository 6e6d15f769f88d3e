/// Submitted login credentials, exactly as received.
///
/// Email lookup is exact-match; no trimming or case folding happens here.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Successful login result: the signed token plus the account email it
/// was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub email: String,
}
