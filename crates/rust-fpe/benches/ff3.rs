extern crate bencher;

use fpe::cipher::CipherKind;
use fpe::context::{Context, Mode};

fn context(b: &mut bencher::Bencher) {
    b.iter(|| {
        let mut ctx = Context::new();
        ctx.init(Mode::Ff3, CipherKind::Aes256, &[0; 32], 26).unwrap();
        ctx
    });
}

fn encrypt(b: &mut bencher::Bencher) {
    let mut ctx = Context::new();
    ctx.init(Mode::Ff3, CipherKind::Aes256, &[0; 32], 26).unwrap();
    b.iter(|| ctx.encrypt_str(None, "0123456789", &[0; 8]));
}

fn decrypt(b: &mut bencher::Bencher) {
    let mut ctx = Context::new();
    ctx.init(Mode::Ff3, CipherKind::Aes256, &[0; 32], 26).unwrap();
    let ct = ctx.encrypt_str(None, "0123456789", &[0; 8]).unwrap();
    b.iter(|| ctx.decrypt_str(None, &ct, &[0; 8]));
}

bencher::benchmark_group!(benches, context, encrypt, decrypt);
bencher::benchmark_main!(benches);
