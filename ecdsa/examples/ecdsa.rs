use ecdsa::{CurveId, EcdsaContext, HashAlgorithm, Signature, SignMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let ctx = EcdsaContext::generate(CurveId::Secp256r1, &mut rng).expect("keygen");

    let digest = HashAlgorithm::Sha256.digest(b"hello ecdsa");
    let der = ctx
        .write_signature(SignMode::Randomized(&mut rng), &digest)
        .expect("sign");

    let sig = Signature::from_der(&der).expect("decode");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let curve_bytes = bincode::serialize(&CurveId::Secp256r1).expect("serialize curve");

    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    let curve2: CurveId = bincode::deserialize(&curve_bytes).expect("deserialize curve");
    assert_eq!(curve2, CurveId::Secp256r1);

    let der2 = sig2.to_der().expect("encode");
    ctx.read_signature(&digest, &der2).expect("verify");

    println!("{curve2}: {} byte signature verified", der2.len());
}
