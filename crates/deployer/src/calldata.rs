//! Constructor calldata encoding for the deployed contracts, matching the
//! serde of the Cairo types the constructors expect (`u256`, `ByteArray` and
//! length-prefixed spans).

use starknet::core::types::Felt;

/// Initial supply minted to the owner by the mock ERC20 constructor.
pub const ERC20_INITIAL_SUPPLY: u128 = 21_000_000 * 10u128.pow(18);

/// Token URI the mock ERC1155 is constructed with.
pub const ERC1155_TOKEN_URI: &str = "token_uri";

/// Encodes a value as a Cairo `u256`: low 128 bits first, then the high bits.
pub fn uint256(value: u128) -> [Felt; 2] {
    [Felt::from(value), Felt::ZERO]
}

/// Encodes a string as a Cairo `ByteArray`: the number of full 31-byte words,
/// the full words, the pending word and the pending word's byte length.
pub fn byte_array(s: &str) -> Vec<Felt> {
    let mut chunks = s.as_bytes().chunks_exact(31);
    let full_words = chunks
        .by_ref()
        .map(Felt::from_bytes_be_slice)
        .collect::<Vec<_>>();
    let pending = chunks.remainder();

    let mut encoded = vec![Felt::from(full_words.len() as u64)];
    encoded.extend(full_words);
    encoded.push(Felt::from_bytes_be_slice(pending));
    encoded.push(Felt::from(pending.len() as u64));
    encoded
}

/// Calldata for the token bundler constructor: the owner address.
pub fn bundler_constructor(owner: Felt) -> Vec<Felt> {
    vec![owner]
}

/// Calldata for the mock ERC20 constructor: the initial supply and its
/// recipient.
pub fn erc20_constructor(recipient: Felt) -> Vec<Felt> {
    let mut calldata = uint256(ERC20_INITIAL_SUPPLY).to_vec();
    calldata.push(recipient);
    calldata
}

/// Calldata for the mock ERC721 constructor: the owner address.
pub fn erc721_constructor(owner: Felt) -> Vec<Felt> {
    vec![owner]
}

/// Calldata for the mock ERC1155 constructor: the token URI, the recipient
/// and a single (token id, value) pair of (1, 1).
pub fn erc1155_constructor(recipient: Felt) -> Vec<Felt> {
    let mut calldata = byte_array(ERC1155_TOKEN_URI);
    calldata.push(recipient);
    calldata.push(Felt::ONE);
    calldata.extend(uint256(1));
    calldata.push(Felt::ONE);
    calldata.extend(uint256(1));
    calldata
}
