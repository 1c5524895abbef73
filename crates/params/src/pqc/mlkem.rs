//! Constants for the ML-KEM key encapsulation mechanism (FIPS 203)

/// Polynomial degree
pub const MLKEM_N: usize = 256;

/// Modulus
pub const MLKEM_Q: u16 = 3329;

/// Size in bytes of seeds, hashes and messages
pub const MLKEM_SYMBYTES: usize = 32;

/// Size in bytes of the shared secret
pub const MLKEM_SSBYTES: usize = 32;

/// Size in bytes of a polynomial serialized with 12 bits per coefficient
pub const MLKEM_POLYBYTES: usize = 384;

/// Structure containing the parameters of one ML-KEM security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKemParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Module rank (number of polynomials per vector)
    pub k: usize,

    /// Noise parameter for the secret and the encryption mask
    pub eta1: u8,

    /// Noise parameter for the encryption errors
    pub eta2: u8,

    /// Bits kept per coefficient of the compressed vector `u`
    pub du: usize,

    /// Bits kept per coefficient of the compressed polynomial `v`
    pub dv: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

impl MlKemParamSet {
    /// Size of a serialized vector of `k` polynomials
    pub const fn polyvec_size(&self) -> usize {
        self.k * MLKEM_POLYBYTES
    }

    /// Size of the compressed vector `u` inside a ciphertext
    pub const fn polyvec_compressed_size(&self) -> usize {
        self.k * self.du * MLKEM_N / 8
    }

    /// Size of the compressed polynomial `v` inside a ciphertext
    pub const fn poly_compressed_size(&self) -> usize {
        self.dv * MLKEM_N / 8
    }
}

/// ML-KEM-512 parameters (NIST security category 1)
pub const MLKEM512: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: MLKEM_SSBYTES,
};

/// ML-KEM-768 parameters (NIST security category 3)
pub const MLKEM768: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SSBYTES,
};

/// ML-KEM-1024 parameters (NIST security category 5)
pub const MLKEM1024: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: MLKEM_SSBYTES,
};

// Sizes are derived quantities; keep the tables honest.
const _: () = {
    let sets = [MLKEM512, MLKEM768, MLKEM1024];
    let mut i = 0;
    while i < sets.len() {
        let p = sets[i];
        assert!(p.public_key_size == p.polyvec_size() + MLKEM_SYMBYTES);
        assert!(p.secret_key_size == 2 * p.polyvec_size() + 3 * MLKEM_SYMBYTES);
        assert!(p.ciphertext_size == p.polyvec_compressed_size() + p.poly_compressed_size());
        i += 1;
    }
};
