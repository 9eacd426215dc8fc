//! Known-good RSA keys used across the unit tests.
//!
//! Generated with `e = 65537` and primes whose two top bits are set, so that
//! `n` has exactly the key size. Integers are minimal big-endian encodings.

use hex_literal::hex;

pub mod rsa1024 {
    use super::*;

    // 1024 bits
    pub const N: [u8; 128] = hex!(
        "dcbdd07a490edf83afb7431fdd9701d951f794ccb5f71552fdf4f40c"
        "0310e569265b54d8622aef56c6c68937eb448d51d969aec7755e3c00"
        "68c13c02d0272c1ef80a1018b6d03a40e3699df6e6badd4bbba50faa"
        "4c2e6e88bd234c421ab312966c64de0f4578dcfe6599fc0561df149a"
        "98e72e5a90c9d0ed26d0bb9fc1820485"
    );

    // 1024 bits
    pub const D: [u8; 128] = hex!(
        "cb1be48e00572d16b04202037a130e62766746852e11918f7199484d"
        "1d2d18c9adbf6fcc42579b2dcf6cb2a9bf52ae6dd78cc48346dd547c"
        "53e7295eb544b5f47a56c15beb3efb0387b46db913a7a16f0461c6b6"
        "d98b17659319f9c0371b54c2677235ddf0b528f05d0eb39219fef472"
        "74740997f2597073ec29bed85954da81"
    );

    // 512 bits
    pub const P: [u8; 64] = hex!(
        "ff4670e99e70173c78ff5100e90c7344c7198c564b5da42484c533c7"
        "f4dad8662ef36527269c7c40d8efb2d60ef46d5e6b0d19d94ff006d8"
        "ac7ab3ce5e735571"
    );

    // 512 bits
    pub const Q: [u8; 64] = hex!(
        "dd5e455566f81bdfde7d88c551263cc2d3d5f88bf256e0ec3643888d"
        "5ded4d31075d30f0954efa1bad1ec6326eec302c86f10e324a7fa884"
        "f56cf7c531960655"
    );

    // 511 bits
    pub const DP: [u8; 64] = hex!(
        "5926d8b83e4517585f498b98adcb535669d25a58a8e98331ddcca150"
        "ec0aa218cdbce34ed10545bfc003b6895b9fb1b28fe07b6e91a45a3f"
        "c1bcf89ed20da581"
    );

    // 512 bits
    pub const DQ: [u8; 64] = hex!(
        "cc651edf9c13baa91a660ec3220a8c4fd808d9555e8d9960813a19fb"
        "6d9e8e8796a5156b0e71bdbd903bba0517263dd4df43f437bb51e3e7"
        "e0349d121696cf81"
    );

    // 512 bits
    pub const QINV: [u8; 64] = hex!(
        "db6f05ed466ca4eb52cfb2b552e65136e5e261f73f20325425738220"
        "55631a510820d38f67563475a8aa044f10fb12154c3c7e3e47d27ee7"
        "0d34e25a32337275"
    );
}

pub mod rsa2048 {
    use super::*;

    // 2048 bits
    pub const N: [u8; 256] = hex!(
        "b9f54d9080a36ca8024dbae7d23e4716c5da56d9eab616bf00120ec6"
        "da6f1587a9e306a4c31cb224524a1398deae51e8ef310591c6c0381d"
        "2649e1e2b8b4f2ec93ed2121d8bd9e802a2e49c7106dce69a2240eef"
        "e2e20629e3b80dc1f1d81878c02a03e1fe4157aa73e444c3c4761617"
        "1b75be0e5ac6a4f83498f13ff4d610b9e400194da05a86617815fa22"
        "e546efff05636edc0b02b49f9c502929a92b2f1898a23cf32010ec9a"
        "193c9369e294e546bfbfea1bcdc68d70f3db1791b00ebf3e7ab1f2d5"
        "24637ef4301e0a68eb85c2aee313b24e130aaee9312287ae6ae098e3"
        "ed5b2dae90ed6954c95f27829a542da7f4f8bedb7c3c9872a6288fdb"
        "b4c3d89b"
    );

    // 2048 bits
    pub const D: [u8; 256] = hex!(
        "8df191c05080ee4a9c5f8ae0b359f85788b4ee00af2948d9888b401e"
        "47d3ed223dea5e42dbf00686b50d784203101ad3ebe88670ccbe22d7"
        "1547e615729a24a7b30e9970c5898ff812ba7c7467b4f98f2645d1e5"
        "085131153e8e5a6a0559c6ec3cfa95362726e76ce3c3853dcdb3b98e"
        "efd60339dfceab540e8a03f4a6c5d3c353d6b775048ba4a276fae1e1"
        "78148dc683315b72cc1d1972e0af3d1f7413d5715afca39f33714b7a"
        "bbcbe87aed4b0f92a400a9afeaec533845f9c420e9ac35d90090493c"
        "acfb0ea78e61a8c0ab6525f945a64958b2a946afe01b46391e1de4c5"
        "289cf8f03e4c588dff8c5925358043b10347953dafa00e97f4ca6f37"
        "a426c541"
    );

    // 1024 bits
    pub const P: [u8; 128] = hex!(
        "e24d4de39424256bab43fb0d5b777b647fe5c478233fb83931aa38c5"
        "0bc17349ff4f61b16d97e180b7a5ba320678f7469cdcdfbb25163962"
        "abbc134bd9411afb43b48db0a28af44245095c52ed402685e38313dc"
        "b90214a858573371cee4f31aafb362c1be45053514384c8d4533105f"
        "aec3b8cebb9d056efd96607cb427c73b"
    );

    // 1024 bits
    pub const Q: [u8; 128] = hex!(
        "d25ca2c5dc15a97a96e413b9e149ad1300645b47689562fc024af111"
        "f25c6f939f9273f250a91f42fffc72e2b4ecc73cc905e6f25194159e"
        "b484c2d91440bd8fe5c649506c89c7f685c3bb4d75df6082548d7235"
        "2ba8d3ee63fce6677b4313d23074f6a31d7b639af0b101dfa5898b86"
        "a401bbe58f02d4bf6cf8a819f4bade21"
    );

    // 1024 bits
    pub const DP: [u8; 128] = hex!(
        "be5b1654836d3048f42457ce318d3caf19e25534553a29257b005b86"
        "6c500a41495025b610a0bc60009a9817b25818703e4c90a9a415a0a9"
        "be199305af36d3925dae47ad37dcb87ff20060b7a4b7dc6fad23ba16"
        "654d39c12da61430fc3e9bbb6be5f20154a24c320cd31a998e86d894"
        "13b6b102bccfe51d2a944e8f371f6ab7"
    );

    // 1024 bits
    pub const DQ: [u8; 128] = hex!(
        "b3c33dc5df2113c71292acd8b750827a2e6794291d922b1837cd5adc"
        "7f43c6855c63867997bc2e5eceea2832db714b810237ecf73e0751c2"
        "6178e21927597ba43032960c07f465d0a0d67684e729900b4fbddfce"
        "d81459a6ea02ffd1865ff7dc3254813f3abe6a8bc90b3a12a81f3600"
        "44bec69690f356628ef89e8e2fb85081"
    );

    // 1021 bits
    pub const QINV: [u8; 128] = hex!(
        "102c6e2530322da57896fb97c6e9fbe0dbd5f47cff64be29d274c74e"
        "d250a6eb0d1061a3ad312bd5889df3d23a0cebeee620032c2229139c"
        "2106fa833ad1bfe650f9db091adc64ccd891817b8555e6486b8d75c2"
        "19dec57302b12d942d6ef9a19e07e7b55c24c8765d50ad5343a5c4e1"
        "cf11cfd8435a462ad6b42f3f76823167"
    );
}
