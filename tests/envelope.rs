use keysmith::crypto::{CONFIG_LEN, KEY_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};
use keysmith::{CryptoError, PasswordBox, ScryptConfig, SecretBox, SymmetricKey};
use proptest::prelude::*;

const FAST: ScryptConfig = ScryptConfig::new(1 << 10, 8, 1);

#[test]
fn attack_at_dawn() -> anyhow::Result<()> {
    let pbox = PasswordBox::new(ScryptConfig::new(1 << 17, 8, 1));

    let blob = pbox.encrypt("correct horse", b"attack at dawn")?;
    assert!(blob.len() >= SALT_LEN + NONCE_LEN + 14 + TAG_LEN);

    let plaintext = pbox.decrypt("correct horse", &blob)?;
    assert_eq!(plaintext.as_slice(), b"attack at dawn");

    assert!(matches!(
        pbox.decrypt("wrong", &blob),
        Err(CryptoError::AuthenticationFailed)
    ));
    Ok(())
}

#[test]
fn config_travels_with_the_blob() -> anyhow::Result<()> {
    let mut stored = FAST.encode().to_vec();
    stored.extend(PasswordBox::new(FAST).encrypt("pw", b"payload")?);

    let (header, blob) = stored.split_at(CONFIG_LEN);
    let config = ScryptConfig::decode(header)?;
    let plaintext = PasswordBox::new(config).decrypt("pw", blob)?;

    assert_eq!(plaintext.as_slice(), b"payload");
    Ok(())
}

#[test]
fn boxes_are_shareable_between_threads() {
    let pbox = std::sync::Arc::new(PasswordBox::new(FAST));
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let pbox = std::sync::Arc::clone(&pbox);
            std::thread::spawn(move || {
                let message = vec![i; 32];
                let blob = pbox.encrypt("pw", &message).unwrap();
                assert_eq!(pbox.decrypt("pw", &blob).unwrap().as_slice(), &message[..]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

proptest! {
    #[test]
    fn secret_box_roundtrips(
        key in any::<[u8; KEY_LEN]>(),
        message in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let key = SymmetricKey::from_bytes(key);
        let sbox = SecretBox::new();
        let envelope = sbox.encrypt(&key, &message).unwrap();
        prop_assert_eq!(envelope.len(), NONCE_LEN + message.len() + TAG_LEN);
        let decrypted = sbox.decrypt(&key, &envelope).unwrap();
        prop_assert_eq!(decrypted.as_slice(), message.as_slice());
    }

    #[test]
    fn any_bit_flip_in_ciphertext_or_tag_is_detected(
        message in proptest::collection::vec(any::<u8>(), 1..128),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = SymmetricKey::from_bytes([0x42; KEY_LEN]);
        let sbox = SecretBox::new();
        let mut envelope = sbox.encrypt(&key, &message).unwrap();

        let sealed_len = envelope.len() - NONCE_LEN;
        let at = NONCE_LEN + position.index(sealed_len);
        envelope[at] ^= 1 << bit;

        prop_assert!(matches!(
            sbox.decrypt(&key, &envelope),
            Err(CryptoError::AuthenticationFailed)
        ));
    }

    #[test]
    fn config_encoding_roundtrips(log_n in 1u32..64, r in 1u64.., p in 1u64..) {
        let config = ScryptConfig::new(1u64 << log_n, r, p);
        let encoded = config.encode();
        prop_assert_eq!(encoded.len(), CONFIG_LEN);
        prop_assert_eq!(ScryptConfig::decode(&encoded).unwrap(), config);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn password_box_roundtrips_and_rejects_other_passwords(
        password in "[a-zA-Z0-9 ]{1,24}",
        other in "[a-zA-Z0-9 ]{1,24}",
        message in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(password != other);
        let pbox = PasswordBox::new(FAST);
        let blob = pbox.encrypt(&password, &message).unwrap();

        let decrypted = pbox.decrypt(&password, &blob).unwrap();
        prop_assert_eq!(decrypted.as_slice(), message.as_slice());
        prop_assert!(matches!(
            pbox.decrypt(&other, &blob),
            Err(CryptoError::AuthenticationFailed)
        ));
    }
}
