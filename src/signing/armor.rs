//! Locating armored blocks in text.
//!
//! Block bodies are decoded by `pgp`; this only finds where each block
//! starts and which type its header line declares.

pub(crate) const PUBLIC_KEY_BLOCK: &str = "PGP PUBLIC KEY BLOCK";
pub(crate) const PRIVATE_KEY_BLOCK: &str = "PGP PRIVATE KEY BLOCK";
pub(crate) const SIGNATURE_BLOCK: &str = "PGP SIGNATURE";

const BEGIN: &str = "-----BEGIN ";
const DASHES: &str = "-----";

/// One armored block: its declared type and its full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    pub label: &'a str,
    pub text: &'a [u8],
}

/// Split `data` into armored blocks in order of appearance.
pub(crate) fn blocks(data: &[u8]) -> Result<Vec<Block<'_>>, String> {
    let text = std::str::from_utf8(data).map_err(|_| "armored data is not text".to_string())?;
    let starts: Vec<usize> = text.match_indices(BEGIN).map(|(at, _)| at).collect();
    if starts.is_empty() {
        return Err("no armor header found".into());
    }

    let mut blocks = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let block = &text[start..end];
        let label = block[BEGIN.len()..]
            .split_once(DASHES)
            .map(|(label, _)| label)
            .ok_or_else(|| "unterminated armor header".to_string())?;
        blocks.push(Block {
            label,
            text: block.as_bytes(),
        });
    }
    Ok(blocks)
}

/// The single block in `data`, which must declare type `label`.
pub(crate) fn single<'a>(data: &'a [u8], label: &str) -> Result<Block<'a>, String> {
    match blocks(data)?.as_slice() {
        [block] if block.label == label => Ok(*block),
        [block] => Err(format!("expected a {label}, found a {}", block.label)),
        blocks => Err(format!("expected one armored block, found {}", blocks.len())),
    }
}
