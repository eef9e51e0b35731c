//! Receiving-address validation for treasury withdrawals.
//!
//! Addresses are bech32 strings (BIP-173 checksum, no length cap since
//! Shelley base addresses exceed 90 characters). The human-readable prefix
//! must match the configured network.

use govtool_types::NetworkId;

use crate::error::FieldError;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.bytes().map(|b| b & 0x1f))
}

/// Regroup 8-bit bytes into 5-bit words, padding the tail.
fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits = 0;
    for &b in data {
        acc = (acc << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Encode raw bytes as a bech32 string under `hrp`.
pub fn encode_bech32(hrp: &str, data: &[u8]) -> String {
    let words = to_base32(data);
    let pm = polymod(
        hrp_expand(hrp)
            .chain(words.iter().copied())
            .chain([0u8; 6]),
    ) ^ 1;
    let mut out = String::with_capacity(hrp.len() + 1 + words.len() + 6);
    out.push_str(hrp);
    out.push('1');
    for w in &words {
        out.push(CHARSET[*w as usize] as char);
    }
    for i in 0..6 {
        out.push(CHARSET[((pm >> (5 * (5 - i))) & 0x1f) as usize] as char);
    }
    out
}

/// Split and checksum-verify a bech32 string, returning its prefix.
fn decode_hrp(input: &str) -> Result<&str, FieldError> {
    let invalid = |why: &str| FieldError::InvalidAddress(why.to_string());
    if input.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(invalid("address must be lower case"));
    }
    let sep = input.rfind('1').ok_or_else(|| invalid("missing separator"))?;
    let (hrp, rest) = input.split_at(sep);
    let data = &rest[1..];
    if hrp.is_empty() || data.len() < 6 {
        return Err(invalid("too short"));
    }
    if !hrp.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(invalid("bad prefix"));
    }
    let mut words = Vec::with_capacity(data.len());
    for c in data.bytes() {
        let w = CHARSET
            .iter()
            .position(|&x| x == c)
            .ok_or_else(|| invalid("character outside bech32 charset"))?;
        words.push(w as u8);
    }
    if polymod(hrp_expand(hrp).chain(words.iter().copied())) != 1 {
        return Err(invalid("checksum mismatch"));
    }
    Ok(hrp)
}

/// Validate a treasury receiving address for `network`.
///
/// Payment (`addr`) and reward (`stake`) addresses are both accepted.
pub fn validate_receiving_address(input: &str, network: NetworkId) -> Result<(), FieldError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FieldError::Required);
    }
    let hrp = decode_hrp(input)?;
    if hrp == network.payment_hrp() || hrp == network.reward_hrp() {
        Ok(())
    } else {
        Err(FieldError::WrongNetwork {
            expected: network.payment_hrp(),
        })
    }
}
