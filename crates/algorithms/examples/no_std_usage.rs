// Exercises the primitives through interfaces that need neither std nor alloc:
// fixed-size buffers only. Built with std here so the results can be printed.
#![cfg_attr(not(feature = "std"), no_std)]

use mlkem_algorithms::error::Result;
use mlkem_algorithms::keccak::{ReferenceKeccak, UnrolledKeccak};
use mlkem_algorithms::poly::prelude::{sample_cbd, sample_ntt, Eta, Polynomial, POLY_BYTES};
use mlkem_algorithms::{HashFunction, Sha3, Sha3_256, ShakeXof128};

fn hash_example() -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(b"Hello, ").update(b"no_std world!");
    hasher.finalize()
}

// Same digest from both permutation backends.
fn backend_example() -> bool {
    let data = b"backend independence";
    Sha3::<ReferenceKeccak, 32>::digest(data) == Sha3::<UnrolledKeccak, 32>::digest(data)
}

// Squeezing in pieces yields the same stream as one long squeeze.
fn xof_example() -> Result<[u8; 64]> {
    let mut xof = ShakeXof128::new();
    xof.update(b"seed")?;
    let mut out = [0u8; 64];
    let (head, tail) = out.split_at_mut(10);
    xof.squeeze(head);
    xof.squeeze(tail);
    Ok(out)
}

// NTT-domain product of a uniform and a small polynomial, encoded to bytes.
fn poly_example() -> [u8; POLY_BYTES] {
    let a = sample_ntt::<UnrolledKeccak>(&[7u8; 32], 0, 0);
    let mut s = sample_cbd::<UnrolledKeccak>(&[9u8; 32], 0, Eta::Two);
    s.ntt();

    let mut prod = Polynomial::basemul_montgomery(&a, &s);
    prod.invntt_tomont();
    prod.reduce();

    let mut bytes = [0u8; POLY_BYTES];
    prod.to_bytes(&mut bytes);
    bytes
}

fn main() {
    println!("mlkem-algorithms no_std usage example");
    println!("=====================================");

    println!("SHA3-256: {}", hex::encode(hash_example()));
    println!("backends agree: {}", backend_example());

    match xof_example() {
        Ok(stream) => println!("SHAKE128: {}", hex::encode(stream)),
        Err(e) => println!("XOF error: {}", e),
    }

    let encoded = poly_example();
    println!("a * s (first 16 bytes): {}", hex::encode(&encoded[..16]));
}
