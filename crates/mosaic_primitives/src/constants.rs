#![forbid(unsafe_code)]

/// Smallest redeemable code.
pub const MIN_REDEMPTION_CODE: u64 = 1;
/// Largest redeemable code; the series has 999 entries.
pub const MAX_REDEMPTION_CODE: u64 = 999;
/// Identifiers of one code occupy `code * STRIDE .. code * STRIDE + 3`.
pub const IDENTIFIER_STRIDE: u64 = 10;

/// Separator between the decimal code and the requester in a redemption message.
pub const MESSAGE_SEPARATOR: &str = "|";
/// Suffix appended to every resolved locator.
pub const LOCATOR_SUFFIX: &str = ".json";

/// Collection display name.
pub const COLLECTION_NAME: &str = "Crypto Baby Animals Mosaic";
pub const COLLECTION_SYMBOL: &str = "CBAM";

/// Personal-message prefix; the decimal byte length of the payload follows it.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

pub const ADDRESS_LEN: usize = 20;
/// r(32) || s(32) || v(1)
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;
/// SEC1 uncompressed point: 0x04 || x(32) || y(32)
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;
