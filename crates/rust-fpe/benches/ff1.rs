extern crate bencher;

use fpe::cipher::CipherKind;
use fpe::context::{Context, Mode};

fn context(b: &mut bencher::Bencher) {
    b.iter(|| {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff1, CipherKind::Aes256, &[0; 32], 26).unwrap();
        ctx
    });
}

fn encrypt(b: &mut bencher::Bencher) {
    let mut ctx = Context::new();
    ctx.init(Mode::Ff1, CipherKind::Aes256, &[0; 32], 26).unwrap();
    b.iter(|| ctx.encrypt_str(None, "0123456789", &[]));
}

fn decrypt(b: &mut bencher::Bencher) {
    let mut ctx = Context::new();
    ctx.init(Mode::Ff1, CipherKind::Aes256, &[0; 32], 26).unwrap();
    let ct = ctx.encrypt_str(None, "0123456789", &[]).unwrap();
    b.iter(|| ctx.decrypt_str(None, &ct, &[]));
}

bencher::benchmark_group!(benches, context, encrypt, decrypt);
bencher::benchmark_main!(benches);
