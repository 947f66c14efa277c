/// Conventional names for well-known OIDs, e.g. `rsaEncryption` for
/// `1.2.840.113549.1.1.1`.
pub trait OidName {
    fn oid_name(&self) -> Option<&'static str>;
}
