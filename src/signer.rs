/// Ed25519 signing for Sui transactions
///
/// Loads a keypair from the PRIVATE_KEY environment variable and produces
/// the two things the RPC layer needs: the sender's Sui address and a
/// serialized transaction signature. Accepted key encodings:
///
/// - base64 of `flag || 32-byte seed` (a Sui keystore entry, flag 0x00)
/// - base64 of a bare 32-byte seed
/// - hex of a 32-byte seed, with or without the 0x prefix
///
/// Only the Ed25519 scheme (flag 0x00) is supported.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Keypair, PublicKey, SecretKey, Signer as _};

type Blake2b256 = Blake2b<U32>;

const ED25519_FLAG: u8 = 0x00;
const SEED_LEN: usize = 32;

/// Sui signs over an intent message: `scope || version || app_id` followed
/// by the BCS transaction bytes. This is the TransactionData intent.
const INTENT_PREFIX: [u8; 3] = [0, 0, 0];

pub struct SuiKeypair {
    keypair: Keypair,
}

impl SuiKeypair {
    /// Read and decode the key from an environment variable
    pub fn from_env(var: &str) -> Result<Self, String> {
        let raw = std::env::var(var)
            .map_err(|_| format!("Environment variable {} is not set", var))?;
        Self::from_encoded(raw.trim())
    }

    pub fn from_encoded(raw: &str) -> Result<Self, String> {
        let bytes = decode_key_material(raw)?;
        let seed = match bytes.len() {
            SEED_LEN => &bytes[..],
            len if len == SEED_LEN + 1 && bytes[0] == ED25519_FLAG => &bytes[1..],
            len if len == SEED_LEN + 1 => {
                return Err(format!(
                    "Unsupported key scheme flag 0x{:02x}; only Ed25519 (0x00) is supported",
                    bytes[0]
                ));
            }
            len => {
                return Err(format!(
                    "Private key must decode to 32 or 33 bytes, got {}",
                    len
                ));
            }
        };

        let secret = SecretKey::from_bytes(seed)
            .map_err(|e| format!("Invalid Ed25519 seed: {}", e))?;
        let public = PublicKey::from(&secret);
        Ok(Self { keypair: Keypair { secret, public } })
    }

    /// The sender address: 0x-prefixed hex of Blake2b-256(flag || pubkey)
    pub fn sui_address(&self) -> String {
        let mut hasher = Blake2b256::new();
        hasher.update([ED25519_FLAG]);
        hasher.update(self.keypair.public.as_bytes());
        format!("0x{}", hex::encode(hasher.finalize()))
    }

    /// Sign base64 transaction bytes. The signature is over the Blake2b-256
    /// digest of the intent message, serialized as
    /// base64(flag || signature || pubkey).
    pub fn sign_transaction(&self, tx_bytes_b64: &str) -> Result<String, String> {
        let tx_bytes = base64::decode(tx_bytes_b64)
            .map_err(|e| format!("Transaction bytes are not valid base64: {}", e))?;

        let mut hasher = Blake2b256::new();
        hasher.update(INTENT_PREFIX);
        hasher.update(&tx_bytes);
        let digest = hasher.finalize();

        let signature = self.keypair.sign(digest.as_slice());

        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(self.keypair.public.as_bytes());
        Ok(base64::encode(serialized))
    }
}

fn decode_key_material(raw: &str) -> Result<Vec<u8>, String> {
    if raw.starts_with("suiprivkey") {
        return Err(
            "Bech32 suiprivkey strings are not supported; export the key as base64 or hex"
                .to_string(),
        );
    }
    let hex_body = raw.strip_prefix("0x").unwrap_or(raw);
    if hex_body.len() == SEED_LEN * 2 && hex_body.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex::decode(hex_body).map_err(|e| format!("Invalid hex key: {}", e));
    }
    base64::decode(raw).map_err(|e| format!("Private key is not valid base64 or hex: {}", e))
}
