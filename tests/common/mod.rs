//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use num_bigint::BigUint;
use sqr_vdf::{BoxedUint, Limb, Modulus};

/// `BoxedUint` to `num_bigint::BigUint`
pub fn to_biguint(uint: &BoxedUint) -> BigUint {
    let mut bytes = Vec::with_capacity(uint.nlimbs() * Limb::BYTES);

    for limb in uint.as_limbs() {
        bytes.extend_from_slice(&limb.0.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to `BoxedUint`
pub fn from_biguint(n: &BigUint) -> BoxedUint {
    BoxedUint::from_be_slice(&n.to_bytes_be())
}

/// RSA-2048 challenge number, 512 hex digits.
pub const RSA_2048_N: &str = concat!(
    "c7970ceedcc3b0754490201a7aa613cd73911081c790f5f1a8726f463550bb5b",
    "7ff0db8e1ea1189ec72f93d1650011bd721aeeacc2acde32a04107f0648c2813",
    "a31f5b0b7765ff8b44b4b6ffc93384b646eb09c7cf5e8592d40ea33c80039f35",
    "b4f14a04b51f7bfd781be4d1673164ba8eb991c2c4d730bbbe35f592bdef524a",
    "f7e8daefd26c66fc02c479af89d64d373f442709439de66ceb955f3ea37d5159",
    "f6135809f85334b5cb1813addc80cd05609f10ac6a95ad65872c909525bdad32",
    "bc729592642920f24c61dc5b3c3b7923e56b16a4d9d373d8721f24a3fc0f1b31",
    "31f55615172866bccc30f95054c824e733a5eb6817f7bc16399d48c6361cc7e5",
);

/// SHA-256 of `"vdf"`, the input used by the known-answer vectors.
pub const VDF_DIGEST: &str = "5bc382da0c21ce5dbac814bd382ac3bee474e467500800e32cbd7f783adf0940";

pub fn rsa_2048() -> Modulus {
    Modulus::from_be_hex(RSA_2048_N).unwrap()
}

/// `(t, x, x^(2^t) mod N)` over RSA-2048.
pub const DIRECT_VECTORS: &[(u64, &str, &str)] = &[
    (
        1,
        VDF_DIGEST,
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000020e494579fb0b2420552a4b3140d5c1157f1d55c9506d9dfe161228dcf7d8e4b0c49a3ba23e0c58ff81163f977b09e5286244487c6c682e2324ffe821dd59000",
    ),
    (
        2,
        VDF_DIGEST,
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000439f12e79f60df042c09accea1dea5dfd5031a690b773d31e49b8bce0109673a2d1216b9ceae9c909ca5e5903f51a410fc2d43385cae66b489950da94902063360f79e51b200729da14f9bc227785d450488f0b38edeeedb3b046bbcddaafab052b08ebc8e917a28c672054b49bd84a80c73d8e384e8b64fa2054c8f1000000",
    ),
    (
        2,
        "a680e2f704919dc027ac89c4943ddcee74aae4c6c4b7eebfe070091df53500f8499288d4d25ec675be0b4b2f9c541f0e7dc61a605ef7616f1a5f83d7c4c85438cbcac933689bccd91dfd368b57b35ab9a75fca0cf1820d252ca941da4f8fd6a628f8198efa9c716e6535480af94c16d5d1b3a7d9dd29a8ce22ee31ea3615cb1e1b96290b6bf242b528fcc28c8f9ce9e5ab7a4d483dc14402245a58a02f999950c127c21c32a984bdaa615cef528708edeeb5e6cde0996b76f87741b6955594e6963314821d5af1b23e3f5a73f8b5094b368adfdc97eef388093d793193cbbdfc8dd2c191339e9238e6385dc7f8c1196aec42fbefed73fe9734f3fdce2a5a9fbb",
        "5411fae465c5275b443bb8ac114c055f99120e3792047c1673be69cc97ed107ca4906a375680935b328aa08f8ffcce2fe84710c4b537e6b7dd827d28d66dac18c235f828cbdbf161d727fc28682d99d7ee1aa83c00d2c1c2304aaa3ab7e63d9d5598d923fe208e8357858dbce1bf2f6f42f10548e9db7cffbe841e05edbaf44e6af43c800f9c1e91bff2b001e069c42db0fa70998e4bd427fe1ce33b685c1a650888c3d32900418e1c9b7c92b91b41381943bb2ed0e03ae29b1e7acd29146dbc521f16460c03a75586eb2210ed93bb21a73af0d9497b83a816d7f177b34ed66b85b887b9c9a646010b9e4fa645b94adb7a95f77d7a9518bf1c1b80974c8f4afe",
    ),
    (
        2,
        "e20c000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "30848297497090cc5cd54f682fbf4993d295875dfbb4dfcde8caa1a9a1738b7e4f65ed8e02a840b8843522fe4066839cca8f10a04d96e137e1fec7d18e0d4687f20bff9e4568a005d60c9bb3f987e78142af0bc3835168ac44a47dd2d1c50273d6625ff734b05429d297abad01d8ef0ba33635d24703453cfe662f4ecd5996f3c3d57d654ddeb84710f63867684dbfabb31f2b5ed2293836d17bbcaab4d760ef52f963cffdc74116112b035ab67df1de8b1c608170326dc69e887664b2823c9362e8b1020cbfbfa0b97a9f71ccbab6118ecf376ca4800d37d8a7730a0850bb82331e2cd00897faeb87256995a965d4491d23bc8623247360ce8b1d11e29f9434",
    ),
    (
        40,
        VDF_DIGEST,
        "9d0073ae84cd3517d3db2f2b0000a82737248b576d8df421549d19320e7823a2c706dd9bdf21c4bf940aa870fd10465b3ea1f6131d629a4a849af14ee2afce19d905379963f93d39b19768ad23445a9a6d23111fad6335c1db3f5601f2151894e3034cac5f7c6f335f7a8a425805a27a152196f4437bc5424139a0fbd22201531e32adb71db66f5b9125e127cae4d9790a2174e81f1a019f6bf21fd9430a308f6bdd0241604f2bed98a37e4a169e15b376e3eb3f0e48cefaaad1fa17d63abdcdc173b72047a65652fe35ec421200ad72fcb13f492976cf93052ed741a14a2c343974e4dd1fb600329417fbd70e49139c562dfea58af68fdd1ab399639404d1ec",
    ),
];

/// `(log2 t, VDF_DIGEST^(2^(2^log2 t)) mod N)` over RSA-2048.
pub const POW2_VECTORS: &[(u32, &str)] = &[
    (
        10,
        "9f5cea72f596defe89f60ff4e5e6c018f4e145eba09db647a0d8f145dcf06230a257dcd0655fb8d55293f2fec26003f3dca90f6b5fbd38db4829ecd9523264279a8487cd066478a3b1cb33764ecea940aa74ee54362009fa0ad6ae75935c6c5beed7ac74fa28ce3e38d511e72b7c21b9f6eda51af6d086078006584bc1e3c5808ed4ec4bd8a4ebe48d6b537d51b80888a4fa380a42d8058394d6353db2b651d51da2efd9ff8451ec3a320cfeb746ac1860f191cbcf7bd046acd50183a545e2197b81936fd41f97ae729ce6ef9b1ac13ea6d269b89ce9eb1ddea895976f01d66d2e45859054e1514ee81ec17a7260fee59a03f83919aeaf5efb4b2e0be6b76541",
    ),
    (
        11,
        "bd458261df583f9adf905527fba3149f150ac3f7c777cdbb034541330de0b85e9405306f8067f35c8797aee7ed46d13280e32c90a4bb70a52a1f49da8a32f5c8cbfb0e14a7375c102f26b9abb8ee517e092439140e44a3f97ae7028c4febb813e42081b00244e41f0ae1987f4d582b26499f8236a926fd3cbe955ddefaaebebca405fbd0138a3739b4e7b1de3f142233a94d732be3f23beacf9dc0b00052e48152820192c7ecbbd4cb2ed2e7b377b693bec28f636283e205591238d4c3e8e72af878fc2db0e0a07dbc7bc3d190279a630f353e89e09bcc18e6d00b33a3ae0ebc7ef9a070d53e816e0084833eb2d29b3eb780c353a698795a687830fc11c15e75",
    ),
    (
        12,
        "8870f1732ec0e6f233b5f6883b804bd5fc588b384b5baad872741b2917279fbb1e5e4b2844ec9070808e34f0a8b834953201eab189bf6a929a4fffa3ebe062f072d04aad91b43c50fe5e29d95bf09b0ba8b8da52f4b02ca8302230865af2c2e1ce234db9fb25b82858a36d79aa43bf7f25772d9cde04365727118808f9183d447060d21fbdd0f7bae17cac2a6af02aea0e8a9c6668ab13b1ce4a03a2ec37cea050e36a7e58664640b12a1a6ee9ebb88bdc90e747334bcf27c1872692c22c81bd1785f1ae90d3e458f9e912322d9008ac9d689e23bfada3aa6ef6209313b9a7cab38790d9c2bd8eab2c813cc4e118935ace4cea31697cd956a5bc04f7fd86346a",
    ),
    (
        13,
        "c4a8f7ff07b6ea6b1e99419766cd5d847fad53204fe8946152c1624873a6f65c096700c14402d26d444861b866c9759f5d4f05593aa9e95b9f6097eea55f4532c3ae16e06a262c88aa14890b5540ad0e8cff14de784a7f9ea450790371c4a36e3bcf604cb348d930f786c374128b39296ac362a5fd0d59c33059f369645cc3dd2fc2b5dad561420395f2e78c88e8874f2ad8cf8b1cfea9e66cd6e91c3ab49e29a9dd91339eba983cd7ca2ce9c2601e26dcac766c6f94773bf6e7f7d45024bd6603e96f8a3b06f333bc197fb29beeba2e8a085be33d4ddf2658b9f91cdd8959597eb8063af9bacc101a048e63c97950fa6b9707e782bab5e444091e654fda8918",
    ),
    (
        14,
        "b85cb9833705ea853ab317013d17d28ee18211a438aa98d20a78830a615bde004d4bbe9d879aa7c4fe88bf79d8eec0440bf09341f6f9a502897f044fe1afe36ce96a43c588e555d66a4d243b5392ffb801e2a067fc5f06bac05d03fabb0a1accb6ebd6e585febb9dd88c569441d971dabcfd8bf10bdd02afb690f090a58a323410b1d879dbbd2526da091d80f63d0e9d13e98f9951e44f58b195908f7366fef564b229ef0dab7b33e0b3cd5b5bc347ffe37141d71aa8daa604c3073ef7838df73de97e53913cb99fb3f889b5e46eb78de3b06a166b84e1ee922bf5184498d6e067ce76b58aaa58ea3fe4fbb03e71a18525f174108cffea65b4aa6da85e396ea6",
    ),
    (
        15,
        "97c0184d3181079c3e6da56f7d052e49d8da98150adde5719194409f2f95b6ac773419470598f5b23701b6ef76c93a6bd41764d3efe100ea3b2673287c331040d2577689c5f08180c821d7f599c2ae045b98f1e914c919f4816d289d461823baa4f7dbd9ca7a0ba3e8459785e1c088acaf2350e895def2222f0f6c6add79fe7c52c7b0734a61b4bb65d5f6682aaa0fb6ee28a4813d6ca60feaf3d9feb07dadc2d361f87598d8024b3a6ab11774cb0f4ba0a6d62c4576aca7af7f72686521f511a63110ef8ef05ca6b1b4f198dabd66335e22a5c70c34dd2ea681ec341f86685fb76c8d6bcf14524f0f8034de85affe323e29f8bbc1a21e71cd7475e5626a77c9",
    ),
    (
        16,
        "9406abd0481c5ee592dafcf2b77cabb8e1667b5ae05293366b3b3e0ac07c83673fe13a378cf237540f54b7afb7a02bfbffb5424a0ba253fb86f25c64629d31742c4ac62987667a2cd6870cfcd404dc9b77b12a7eb2b7b6bb80f62de2868066ac9ad2071a6fb34ed56638b5c98f6189961d8fde7874d2e339fabcca96673355dc8decabec0e6f46526954f68f119b09691cab82166ebf043d4f4beb8a30da7caa5cb8ab86f66cc84bf0d0240ba4563d377e428d494226e8354f787ed2b4abacfbc877ad4586926ed67c6522968a1305d1b0e54b25a18368488b3b6e4a905cea5613722176db5d7ecb5b66596598bd5f75c455b22f16c7f010267320165f31916b",
    ),
    (
        17,
        "ac4c90add54e1b8aaa542cbf84c5981ea2365ff011fb4f6b8b6b87d6931672e4bd4873e5e1290de03d21451ef7a8b0286c2c602d2d852a180fbd34ef502abe5ee8cb9bf2104aa084baa2f7b4a472c6c6b0adf3c36c242be16aa47c3b7014338483ed5a5753fc120b3ff86b17d04050a89b001376197e04bf05aca5a391f89acac4a89cdd06d5062e4dfab34c572e86e78facf10b812c2f6a67f4f998b2591a60da32c0daccc6c1ca195bb2feabefc3f3a6d7799f9b62182ed9c4aec20f0fd743b1ab71ebd9b00034a7feec208cdab095b6628a065cfbc8aab452bc6099231966f983ec734a628774b3e38613dab659199acf0f454786dc351de0ac305e502d15",
    ),
    (
        18,
        "189dc6d3d27f93fefe32ba60a80e471091a0f22e5f6dc6f44d91ae71aaa4788f2838081d2dfbc83f73f26e684b27fecf87c24ff5ae3484822e1a14126647f9f3bbcb87c954004e7c27eddc3dc0745b9486643621ff694d340f2478128aa7c1a57245d899d3edbc85c60aa5479feade07e68c8272e1a6601bc67e17a8f51efd33e9e5ddcb7bcd1adb9e134d945ada563d5f12a6517ec2aa235e0b4da65c24fb7932e7aeb3e7614af3083ee787749d1d003662916b719594db669b40a14b247cbf59849dab19d930833a10e70e8096098fc8ce9f398734c2f6362179c518a66f63d0e1ed97bfca36d2644e28039639466036db172213c3885be103c7dfb3385a80",
    ),
    (
        19,
        "44b8800ec43750fba19c7186af2653dd652af8d0bb72e6852a38c090afee801fed3aaefff62ae8d2c88a1a2afa9d5ea208d2f44ef9a93a20254fbbe2725fcbf5ac35c952149c23447c2aa81862ec58975d2679106326fdefc4d032549286e1d23de60822f8aa887aacc8719de38f4a64dec41d49cc01921e8cc415bf6315d9d3b0d57fdf861e03318617573e019de7e65a77ba9b4588bd8f7247f99801279926d88a04e2e260be49bc3e65a1189c126a376e58d0db437b154451f5b92748358a7533581e1e76f5158dc660833817c181b3b491a1e03481262ee178c3317e8b23bc8e3dd87b03a87857b1ce4d4a1fa469d7cd3d84505a5d8762ddfc522ac73418",
    ),
    (
        20,
        "4ed421fa52dd1b828839b74b07f8ce6de0a16f752c893cf49dc55c23fd9ff3da5538df0979f42bc5b9a2dbb14c25b2da5a57ef814995ffba82441aac9633d537bddabd5f6229aff0cf92059aa3d22837e9daa06182968cc329f5926d53ac701d75add55494ced38da658faa7737aa19e49188b7a2621174e8897665dbe0d79c6f45b917112b5ff47b75aa45b4a8b1c0372185190e229e549fc58adfb1a452bf146bcbef3970737abd2e6a928baeb6c1b45f5f0a4188dc81e8d61f5f6413f3f5d3f03337eb8cf850e6388fd3a61fd33a831d552f6cecde6ef16f184dd91a0c717cfd81aa604277e799e46b09d0e55224503d7c9711596c88e7af73500afa30cf1",
    ),
];
