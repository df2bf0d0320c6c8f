//! Certicom-style ECCp challenge domain parameters.
//!
//! Nine short-Weierstrass curves over prime fields at bit widths 79 through
//! 359, shipped for test and benchmark use. Each set carries the field
//! prime `p`, the curve coefficients, a base point `G` of prime order `n`,
//! a sample private key `d`, and the matching public key `Q = d·G`; the
//! public keys have been recomputed from the private keys so every triple
//! is self-consistent.
//!
//! A tenth set, [`ANOMALOUS_79`], is a trace-one curve: its base point has
//! order exactly `p`, the one condition under which the crate's mod-`p`
//! signature arithmetic verifies its own signatures (see the caveat in the
//! [`ecdsa`](crate::Ecdsa) documentation).

/// One ECCp domain parameter set, hex-encoded.
#[derive(Clone, Copy, Debug)]
pub struct EccpParams {
    /// Bit width of the field prime.
    pub bits: u32,
    /// Field prime `p`.
    pub p: &'static str,
    /// Curve coefficient `a`.
    pub a: &'static str,
    /// Curve coefficient `b`.
    pub b: &'static str,
    /// Base point x-coordinate.
    pub gx: &'static str,
    /// Base point y-coordinate.
    pub gy: &'static str,
    /// Order of the base point (prime).
    pub n: &'static str,
    /// Sample private key.
    pub d: &'static str,
    /// Public key x-coordinate, `Q = d·G`.
    pub qx: &'static str,
    /// Public key y-coordinate.
    pub qy: &'static str,
}

/// ECCp-79 parameters.
pub const ECCP_79: EccpParams = EccpParams {
    bits: 79,
    p: "62ce5177412aca899cf5",
    a: "39c95e6dddb1bc45733c",
    b: "1f16d880e89d5a1c0ed1",
    gx: "315d4b201c208475057d",
    gy: "35f3df5ab370252450a",
    n: "62ce5177407b7258dc31",
    d: "2ce5177407b7258dc31",
    qx: "1453b8dc97f50b84f47a",
    qy: "47a8c94cf19ff3141f35",
};

/// ECCp-89 parameters.
pub const ECCP_89: EccpParams = EccpParams {
    bits: 89,
    p: "158685c903f1643908ba955",
    a: "6f39b6cc51504a8ac22e63",
    b: "647e7ea1062ae69a7d1037",
    gx: "c031d875dbf8e60be95b0a",
    gy: "6f82c1f879745bf676d0a",
    n: "158685c903ef906d7f58d47",
    d: "58685c903ef906d7f58d47",
    qx: "c557946b682ba4d826997e",
    qy: "13de8e89e423ed1fa2d36d8",
};

/// ECCp-97 parameters.
pub const ECCP_97: EccpParams = EccpParams {
    bits: 97,
    p: "16ea1595ed21ae4d8d8420e35",
    a: "47370916a603b07657c305c4",
    b: "1124df86d04064f503d9925af",
    gx: "d5d9e9dff58a9232a2749ebc",
    gy: "11b34ae5aab7c7ae55d6abdb5",
    n: "16ea1595ed21ae98fb6cca20d",
    d: "6ea1595ed21ae98fb6cca20d",
    qx: "f4cfc469d5504524c8796dee",
    qy: "5c563b7706beafd0ae02a560",
};

/// ECCp-109 parameters.
pub const ECCP_109: EccpParams = EccpParams {
    bits: 109,
    p: "1bd579792b380b5b521e6d9fb599",
    a: "fd4c926fd178e9805e663021744",
    b: "153d3cbb508ffe3a7f31ff4faffd",
    gx: "4cc974ebbcbfdc3636feb9f11c7",
    gy: "7611b0eb1229c0bfc5f35521692",
    n: "1bd579792b380b049c4d13a75ae5",
    d: "bd579792b380b049c4d13a75ae5",
    qx: "100382fe3501105a9d5276016cf0",
    qy: "1b712ac617a3939fee5c0ffeda57",
};

/// ECCp-131 parameters.
pub const ECCP_131: EccpParams = EccpParams {
    bits: 131,
    p: "48e1d43f293469e33194c43186b3abc0b",
    a: "41cb121ce2b31f608a76fc8f23d73cb66",
    b: "2f74f717e8dec90991e5ea9b2ff03da58",
    gx: "3df84a96b5688ef574fa91a32e197198a",
    gy: "14721161917a44fb7b4626f36f0942e71",
    n: "48e1d43f293469e317f7ed728f6b8e6f1",
    d: "8e1d43f293469e317f7ed728f6b8e6f1",
    qx: "1d979b07bb8d563f483d487e5ec7f2c42",
    qy: "38f276544bfe0b2fb04c59d4274372979",
};

/// ECCp-163 parameters.
pub const ECCP_163: EccpParams = EccpParams {
    bits: 163,
    p: "5177b8a2a0fd6a4ff55cda06b0924e125f86cad9b",
    a: "43182d283fce3880730c9a2fdd3f6016529a166af",
    b: "20c61e9459e53d8871bcaadc2dfc8ad5225228035",
    gx: "17e7012277e1b4e43f7bf74657e8be08baca175b",
    gy: "aa03a0a82690704697e8c504cb135b2b6eef3c83",
    n: "5177b8a2a0fd6a4ff55cca7b8a1e21c88bd53b2c1",
    d: "177b8a2a0fd6a4ff55cca7b8a1e21c88bd53b2c1",
    qx: "2888651e4d3c26786f04aee9e9f3fc8ff97ae5ad5",
    qy: "40a80bd111c07f22a8b0bf35c1658555b67eb4a84",
};

/// ECCp-191 parameters.
pub const ECCP_191: EccpParams = EccpParams {
    bits: 191,
    p: "7df5bb7bf830f63c77667331106f9001b27d39941032f5e5",
    a: "3bd4fda00a3e52e1af5c9456686ab1b96195810c27c5b110",
    b: "24d1d4331f8651b052e8042fa43255886e09bef9d3174872",
    gx: "3b511bc3229cb4ae654dfbc63210e2783e91f43aa68d0ef4",
    gy: "4619a505395a031a304c0b72061099f3d0840ca61de2f4bc",
    n: "7df5bb7bf830f63c776673315f1259168cf997380aca72c3",
    d: "df5bb7bf830f63c776673315f1259168cf997380aca72c3",
    qx: "5faccc375ce32c9845846d9c1308c134c01deabfc677b0b8",
    qy: "72744cf86df77e0866b580152d68a387a625bb88045dd951",
};

/// ECCp-239 parameters.
pub const ECCP_239: EccpParams = EccpParams {
    bits: 239,
    p: "7cfb4c973a86cdaf898231e4960acdbbf5b6a9017dbed75ffabdd892085d",
    a: "76d4219cf7498b5b471e85bc4daba3ce47adc806228fbb0bce197c4f4556",
    b: "4f0911a649b98cd0d3f695695e44743ea948e70b78cab2c24c4e7d50e2b3",
    gx: "d35ed464403b23cc681f18534c14b6fa2ade7720523f5094ad9bfbe4752",
    gy: "52f1bc7c3c7438a91099fdd53666a0185fb59688ca3e380840903b589beb",
    n: "7cfb4c973a86cdaf898231e4960accb3e442837a1d551d28f3b495f5ec5f",
    d: "cfb4c973a86cdaf898231e4960accb3e442837a1d551d28f3b495f5ec5f",
    qx: "322ca2b3ee1bc2a8ba9bd1d5488b1ec84ac57773aec562edfa08437328e6",
    qy: "2b2ac29d9404b8c6351d80aedd77a3ff9e133360ff1685c3cc54524e9bf3",
};

/// ECCp-359 parameters.
pub const ECCP_359: EccpParams = EccpParams {
    bits: 359,
    p: "58d8420df55d2b2000fe2a55a032ab225f544f8cb69cdf219b0e39423721f32a199d58685c903f1643908ba969",
    a: "877aebb1771a6eea1a7681809b68846818d6434edf6b4ef2381672de2cae70cb1ba3e6a5fbd6de67170e4fc62",
    b: "3ade22e91f88ec93165a5ba6f151aa1ef265ff5fd012f30b9a2d12a0e2c3f5d7e695ddb2fa75de2139e61d8dc8",
    gx: "2f912b99ad5d761593c2ce9d2454ee91efd1c698a0da7c2efe0db8696406885e63edb5cd29c2735ec12183312d",
    gy: "335e0c161bab13bc46de0cd4e0ba17913b9c1ee26a3dcf9022de77431896f329d8283b3dc93c469564f9043caa",
    n: "58d8420df55d2b2000fe2a55a032ab225f544f8cb69cd0be1504766b9dd626631a535ba1ba6cb8d062f94102ed",
    d: "8d8420df55d2b2000fe2a55a032ab225f544f8cb69cd0be1504766b9dd626631a535ba1ba6cb8d062f94102ed",
    qx: "334912d5c8f9e483ae7bd5b0eb0a108b13924d74ae5650a8797225bc835a880f289b437b77e340a2521ba6d1a0",
    qy: "3cc3c328e0034d0f303727c8f8b7fd66b1e2dd0c28e1f827402204408ce37d97964d81b82e77994cee487672f3",
};

/// Trace-one curve at 79 bits: the base point has order exactly `p`
/// (so `n = p`), constructed from the CM discriminant −11 family.
///
/// Signature round trips succeed on this curve; on the ECCp sets above
/// they do not, because the mod-`p` scalar arithmetic never consults the
/// group order.
pub const ANOMALOUS_79: EccpParams = EccpParams {
    bits: 79,
    p: "5a82799aa623e9448577",
    a: "3566267f562555da8896",
    b: "1049d3640626c2708bb5",
    gx: "4",
    gy: "470658a8f108c4ae083a",
    n: "5a82799aa623e9448577",
    d: "3a1c0ed1b27d399462ce",
    qx: "3560daed1a6160b94af8",
    qy: "197c317ca57092381e00",
};

/// All ECCp challenge parameter sets, ascending by bit width.
pub const ECCP_PARAMS: &[EccpParams; 9] = &[
    ECCP_79, ECCP_89, ECCP_97, ECCP_109, ECCP_131, ECCP_163, ECCP_191, ECCP_239, ECCP_359,
];
