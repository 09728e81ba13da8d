//! Keccak-f[1600] permutation
//!
//! The permutation operates on 25 lanes of 64 bits. [`permute`] maps the
//! 200-byte state to lanes (little-endian), runs the 24 rounds and writes
//! the lanes back; the lanes never outlive the call.

use super::{PI_LANES, ROTATIONS, ROUND_CONSTANTS, STATE_BYTES};

/// Applies the 24-round Keccak-f[1600] permutation to a lane array.
///
/// Each round applies, in order:
/// - theta: XOR every lane with the parities of two neighbouring columns
/// - rho and pi: rotate each lane and move it to its new position
/// - chi: the only non-linear step, combining three lanes of a row
/// - iota: XOR the round constant into lane 0
pub fn keccak_f(lanes: &mut [u64; 25]) {
    let mut columns = [0u64; 5];

    for &round_constant in ROUND_CONSTANTS.iter() {
        // theta
        for (x, column) in columns.iter_mut().enumerate() {
            *column = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }

        for x in 0..5 {
            let t = columns[(x + 4) % 5] ^ columns[(x + 1) % 5].rotate_left(1);

            for y in (0..25).step_by(5) {
                lanes[y + x] ^= t;
            }
        }

        // rho and pi
        let mut carried = lanes[1];

        for (&target, &rotation) in PI_LANES.iter().zip(ROTATIONS.iter()) {
            let displaced = lanes[target];
            lanes[target] = carried.rotate_left(rotation);
            carried = displaced;
        }

        // chi
        for y in (0..25).step_by(5) {
            let row = [
                lanes[y],
                lanes[y + 1],
                lanes[y + 2],
                lanes[y + 3],
                lanes[y + 4],
            ];

            for x in 0..5 {
                lanes[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        lanes[0] ^= round_constant;
    }
}

/// Applies Keccak-f[1600] to a 200-byte state in place.
///
/// Bytes are loaded into lanes in little-endian order, as FIPS 202
/// prescribes, and stored back the same way.
pub fn permute(state: &mut [u8; STATE_BYTES]) {
    let mut lanes = [0u64; 25];

    for (lane, chunk) in lanes.iter_mut().zip(state.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(bytes);
    }

    keccak_f(&mut lanes);

    for (chunk, lane) in state.chunks_exact_mut(8).zip(lanes.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_first_lane() {
        let mut state = [0u8; STATE_BYTES];
        permute(&mut state);

        assert_eq!(
            state[..16],
            [
                0xe7, 0xdd, 0xe1, 0x40, 0x79, 0x8f, 0x25, 0xf1, 0x8a, 0x47, 0xc0, 0x33, 0xf9, 0xcc,
                0xd5, 0x84,
            ]
        );
    }

    #[test]
    fn zero_state_permuted_twice() {
        let mut state = [0u8; STATE_BYTES];
        permute(&mut state);
        permute(&mut state);

        assert_eq!(state[..8], [0x3c, 0xcb, 0x6e, 0xf9, 0x4d, 0x95, 0x5c, 0x2d]);
    }
}
