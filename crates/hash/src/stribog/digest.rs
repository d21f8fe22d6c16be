// Copyright 2025 Irreducible Inc.

use digest::{
	consts::U64, core_api::BlockSizeUser, FixedOutput, FixedOutputReset, HashMarker, Output,
	OutputSizeUser, Reset, Update,
};

use super::{arith::U512, compression::StribogCompression, padding::pad, Block, BLOCK_LEN};
use crate::compression::PseudoCompressionFunction;

/// Length of a Stribog-512 digest in bytes.
pub const DIGEST_LEN: usize = BLOCK_LEN;

const BLOCK_BITS: u64 = (BLOCK_LEN * 8) as u64;

/// Chaining value, bit counter and checksum of a single digest computation.
#[derive(Debug, Clone)]
struct State {
	h: Block,
	n: U512,
	sigma: U512,
}

impl State {
	fn new() -> Self {
		Self {
			h: [0; BLOCK_LEN],
			n: U512::ZERO,
			sigma: U512::ZERO,
		}
	}

	fn absorb_block(&mut self, block: &Block) {
		self.h = StribogCompression.compress([self.h, *block, self.n.to_be_block()]);
		self.n = self.n.wrapping_add(U512::from(BLOCK_BITS));
		self.sigma = self.sigma.wrapping_add(U512::from_be_block(block));
	}

	fn absorb_remainder(&mut self, remainder: &[u8]) {
		let padded = pad(remainder);
		let leading = padded.leading_block();
		self.h = StribogCompression.compress([self.h, leading, self.n.to_be_block()]);
		self.n = self.n.wrapping_add(U512::from(remainder.len() as u64 * 8));
		// The checksum adds the whole padded buffer as one integer, which modulo 2^512 is its
		// trailing block.
		self.sigma = self
			.sigma
			.wrapping_add(U512::from_be_block(&padded.trailing_block()));
	}

	fn finalize(self) -> Block {
		let zero = [0; BLOCK_LEN];
		let h = StribogCompression.compress([self.h, self.n.to_be_block(), zero]);
		StribogCompression.compress([h, self.sigma.to_be_block(), zero])
	}
}

/// Computes the Stribog-512 digest of `message`.
///
/// Full blocks are taken from the end of the message towards its start. The leading
/// `message.len() % 64` bytes are padded and compressed last.
#[tracing::instrument(level = "trace", skip_all, fields(len = message.len()))]
pub fn stribog512(message: &[u8]) -> [u8; DIGEST_LEN] {
	let mut state = State::new();

	let mut blocks = message.rchunks_exact(BLOCK_LEN);
	for block in &mut blocks {
		state.absorb_block(block.try_into().expect("chunk is one block long"));
	}

	let remainder = blocks.remainder();
	if !remainder.is_empty() {
		state.absorb_remainder(remainder);
	}

	state.finalize()
}

/// Stribog-512 behind the [`digest`] traits.
///
/// The first block compressed is the last block of the message, so nothing can be absorbed
/// before finalization. The hasher keeps all input until then.
#[derive(Debug, Default, Clone)]
pub struct Stribog512 {
	buffer: Vec<u8>,
}

impl HashMarker for Stribog512 {}

impl Update for Stribog512 {
	fn update(&mut self, data: &[u8]) {
		self.buffer.extend_from_slice(data);
	}
}

impl OutputSizeUser for Stribog512 {
	type OutputSize = U64;
}

impl BlockSizeUser for Stribog512 {
	type BlockSize = U64;
}

impl FixedOutput for Stribog512 {
	fn finalize_into(self, out: &mut Output<Self>) {
		out.copy_from_slice(&stribog512(&self.buffer));
	}
}

impl Reset for Stribog512 {
	fn reset(&mut self) {
		self.buffer.clear();
	}
}

impl FixedOutputReset for Stribog512 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&stribog512(&self.buffer));
		Reset::reset(self);
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use super::*;
	use crate::stribog::compression::compress;

	#[test]
	fn test_empty_message() {
		let expected = hex!("0156c6149827bb636da5abccf272529ab0a3197611b7c04b951eefcaad97dd85a60c1eb9ed372d40a18ea35c11b04013fe2b08f1a07cd39363b46bdd396da6bb");
		assert_eq!(stribog512(&[]), expected);

		// Two finalization compressions of all-zero counter and checksum.
		let zero = [0u8; BLOCK_LEN];
		assert_eq!(compress(&compress(&zero, &zero, &zero), &zero, &zero), expected);
	}

	#[test]
	fn test_short_message() {
		let expected = hex!("269d833c4757df73ddedd6548643e089f9bb1897fc77924dfc4cbcd6837d6e9eead4050500a92ef6330c6d3d1f1cd6fc196ba2760ee683214335be0fb500ceae");
		assert_eq!(stribog512(b"abc"), expected);
	}

	#[test]
	fn test_blocks_are_consumed_from_the_end() {
		let first = [0x01u8; BLOCK_LEN];
		let second = [0x02u8; BLOCK_LEN];
		let message = [first, second].concat();

		let zero = [0u8; BLOCK_LEN];
		let n1 = U512::from(BLOCK_BITS).to_be_block();
		let n2 = U512::from(2 * BLOCK_BITS).to_be_block();
		let sigma = U512::from_be_block(&first)
			.wrapping_add(U512::from_be_block(&second))
			.to_be_block();

		let h = compress(&zero, &second, &zero);
		let h = compress(&h, &first, &n1);
		let h = compress(&h, &n2, &zero);
		let h = compress(&h, &sigma, &zero);
		assert_eq!(stribog512(&message), h);
	}

	#[test]
	fn test_remainder_is_the_message_head() {
		let message: Vec<u8> = (0..70u8).collect();
		let (head, tail) = message.split_at(6);

		let zero = [0u8; BLOCK_LEN];
		let padded = pad(head);
		let n1 = U512::from(BLOCK_BITS).to_be_block();
		let n2 = U512::from(BLOCK_BITS + 48).to_be_block();
		let tail: Block = tail.try_into().unwrap();
		let sigma = U512::from_be_block(&tail)
			.wrapping_add(U512::from_be_block(&padded.leading_block()))
			.to_be_block();

		let h = compress(&zero, &tail, &zero);
		let h = compress(&h, &padded.leading_block(), &n1);
		let h = compress(&h, &n2, &zero);
		let h = compress(&h, &sigma, &zero);
		assert_eq!(stribog512(&message), h);
	}

	#[test]
	fn test_digest_traits() {
		let message = b"The quick brown fox jumps over the lazy dog";
		let expected = hex!("475e810c16ec004dbdb9b574d61fd72a893f5e53782c32ba9fc04991b3f47e1f7e11e75ed016c1ea76778ed325f3c2050d7909e84e17cffe18e62e8d1e75f2b3");

		assert_eq!(stribog512(message), expected);
		assert_eq!(Stribog512::digest(message)[..], expected);

		let mut hasher = Stribog512::new();
		Digest::update(&mut hasher, &message[..10]);
		Digest::update(&mut hasher, &message[10..]);
		assert_eq!(hasher.finalize_reset()[..], expected);

		// After a reset the hasher starts from the empty message again.
		assert_eq!(hasher.finalize()[..], stribog512(&[]));
	}

	#[test]
	fn test_output_size() {
		assert_eq!(<Stribog512 as Digest>::output_size(), DIGEST_LEN);
	}
}
