use std::path::Path;

use account_utils::{AccountKey, HashAlgorithm, PublicKey, SignatureAlgorithm, FULL_WEIGHT};
use corvid_config::{ReaderWriter, State};
use corvid_gateway::{ContractSource, Gateway, OnChainAccount};
use corvid_primitives::consts::EMULATOR_SERVICE_ACCOUNT;
use tracing::{debug, info};

use super::error::CreateError;

pub const DEFAULT_SIG_ALGO: &str = "ECDSA_P256";
pub const DEFAULT_HASH_ALGO: &str = "SHA3_256";

/// Inputs of an account creation with caller supplied keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateOptions {
    /// Configured account that signs and pays for the creation.
    pub signer: String,
    /// Hex encoded public keys, optionally `0x` prefixed.
    pub keys: Vec<String>,
    pub weights: Vec<u32>,
    pub sig_algos: Vec<String>,
    pub hash_algos: Vec<String>,
    /// Contracts to deploy with the account, as `name:filename`.
    pub contracts: Vec<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            signer: EMULATOR_SERVICE_ACCOUNT.to_string(),
            keys: Vec::new(),
            weights: Vec::new(),
            sig_algos: vec![DEFAULT_SIG_ALGO.to_string()],
            hash_algos: vec![DEFAULT_HASH_ALGO.to_string()],
            contracts: Vec::new(),
        }
    }
}

/// Validates `options` and creates the account through `gateway`.
///
/// The gateway is only contacted once every input has been validated and the signer
/// resolved.
pub async fn create_with_keys<RW: ReaderWriter + Clone>(
    state: &State<RW>,
    gateway: &dyn Gateway,
    options: &CreateOptions,
) -> Result<OnChainAccount, CreateError> {
    let keys = account_keys(options)?;
    let contracts = read_contracts(state.rw(), &options.contracts)?;
    let signer = state.resolve_account(&options.signer)?;

    debug!(
        target: "corvid::accounts::create",
        signer = %signer.name,
        keys = keys.len(),
        contracts = contracts.len(),
        "submitting account creation"
    );
    let account = gateway.create_account(&signer, &keys, &contracts).await?;
    info!(target: "corvid::accounts::create", address = %account.address, "account created");

    Ok(account)
}

/// Builds the key descriptors from the parallel key, weight and algorithm lists.
pub fn account_keys(options: &CreateOptions) -> Result<Vec<AccountKey>, CreateError> {
    let key_count = options.keys.len();
    let (sig_algos, hash_algos) = expand_algorithms(options)?;

    let sig_algos = sig_algos
        .iter()
        .map(|algo| SignatureAlgorithm::parse(algo))
        .collect::<Result<Vec<_>, _>>()?;
    let hash_algos = hash_algos
        .iter()
        .map(|algo| HashAlgorithm::parse(algo))
        .collect::<Result<Vec<_>, _>>()?;

    let weights = if options.weights.is_empty() {
        vec![FULL_WEIGHT; key_count]
    } else if options.weights.len() == key_count {
        options.weights.clone()
    } else {
        return Err(CreateError::Validation(format!(
            "must provide a key weight for every key provided to --key: {} keys, {} weights",
            key_count,
            options.weights.len()
        )));
    };

    options
        .keys
        .iter()
        .enumerate()
        .map(|(i, key)| -> Result<AccountKey, CreateError> {
            let public_key = PublicKey::decode_hex(sig_algos[i], key)?;
            Ok(AccountKey::new(i as u32, &public_key, hash_algos[i], weights[i])?)
        })
        .collect()
}

/// A single signature and hash algorithm applies to every key; otherwise the counts must
/// line up with the keys.
fn expand_algorithms(options: &CreateOptions) -> Result<(Vec<String>, Vec<String>), CreateError> {
    let keys = options.keys.len();
    let (sigs, hashes) = (&options.sig_algos, &options.hash_algos);

    if sigs.len() == 1 && hashes.len() == 1 {
        return Ok((vec![sigs[0].clone(); keys], vec![hashes[0].clone(); keys]));
    }

    if keys != sigs.len() || sigs.len() != hashes.len() {
        return Err(CreateError::Validation(format!(
            "must provide a signature and hash algorithm for every key provided to --key: {} keys, {} signature algo, {} hash algo",
            keys,
            sigs.len(),
            hashes.len()
        )));
    }

    Ok((sigs.clone(), hashes.clone()))
}

/// Reads every `name:filename` contract argument through `rw`.
pub fn read_contracts<RW: ReaderWriter>(
    rw: &RW,
    contracts: &[String],
) -> Result<Vec<ContractSource>, CreateError> {
    contracts
        .iter()
        .map(|contract| {
            let (name, filename) = contract
                .split_once(':')
                .filter(|(name, filename)| !name.is_empty() && !filename.is_empty())
                .ok_or_else(|| {
                    CreateError::Validation(format!(
                        "wrong format for contract, correct format is name:filename, but got: {contract}"
                    ))
                })?;

            let code = rw.read(Path::new(filename)).map_err(|err| {
                CreateError::Validation(format!(
                    "failed to read contract {name} from {filename}: {err}"
                ))
            })?;

            Ok(ContractSource {
                name: name.to_string(),
                code: String::from_utf8_lossy(&code).into_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use account_utils::{KeyGenerator, Secp256k1Generator, ZeroizeString};
    use corvid_config::{memory::MemoryReaderWriter, Account};
    use corvid_gateway::MockGateway;
    use corvid_primitives::alloy_primitives::address;
    use std::collections::BTreeMap;

    fn secp_key() -> String {
        Secp256k1Generator
            .generate(SignatureAlgorithm::EcdsaSecp256k1)
            .unwrap()
            .public_key
            .to_hex()
    }

    fn state() -> State<MemoryReaderWriter> {
        let mut state = State::init(MemoryReaderWriter::new(), "corvid.json");
        state.accounts_mut().add_or_update(Account::inline(
            EMULATOR_SERVICE_ACCOUNT,
            address!("f8d6e0586b0a20c7000000000000000000000000"),
            Vec::new(),
            ZeroizeString::from("44".repeat(32)),
        ));
        state
    }

    fn options(keys: Vec<String>) -> CreateOptions {
        CreateOptions {
            keys,
            sig_algos: vec!["ECDSA_secp256k1".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn mismatched_counts_fail_before_chain_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_create_account().never();

        let options = CreateOptions {
            keys: vec![secp_key(), secp_key(), secp_key()],
            sig_algos: vec!["ECDSA_secp256k1".to_string()],
            hash_algos: vec!["SHA3_256".to_string(), "SHA2_256".to_string()],
            ..Default::default()
        };
        let err = create_with_keys(&state(), &gateway, &options).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "must provide a signature and hash algorithm for every key provided to --key: 3 keys, 1 signature algo, 2 hash algo"
        );
        assert!(matches!(err, CreateError::Validation(_)));
    }

    #[test]
    fn single_algorithms_apply_to_every_key() {
        let keys = account_keys(&options(vec![secp_key(), format!("0x{}", secp_key())])).unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].index, 1);
        assert!(keys
            .iter()
            .all(|k| k.sig_algo == SignatureAlgorithm::EcdsaSecp256k1
                && k.hash_algo == HashAlgorithm::Sha3_256
                && k.weight == FULL_WEIGHT));
    }

    #[test]
    fn unknown_algorithm_names_the_input() {
        let mut opts = options(vec![secp_key()]);
        opts.sig_algos = vec!["RSA".to_string()];
        assert_eq!(
            account_keys(&opts).unwrap_err().to_string(),
            "invalid signature algorithm: RSA"
        );

        let mut opts = options(vec![secp_key()]);
        opts.hash_algos = vec!["MD5".to_string()];
        assert_eq!(
            account_keys(&opts).unwrap_err().to_string(),
            "invalid hash algorithm: MD5"
        );
    }

    #[test]
    fn weights_must_match_and_stay_in_range() {
        let mut opts = options(vec![secp_key(), secp_key()]);
        opts.weights = vec![500];
        assert!(matches!(account_keys(&opts), Err(CreateError::Validation(_))));

        opts.weights = vec![500, 1001];
        assert_eq!(
            account_keys(&opts).unwrap_err().to_string(),
            "key weight 1001 exceeds the full signing weight"
        );

        opts.weights = vec![500, 500];
        let keys = account_keys(&opts).unwrap();
        assert_eq!(keys[0].weight, 500);
    }

    #[test]
    fn malformed_key_is_rejected() {
        let err = account_keys(&options(vec!["abcd".to_string()])).unwrap_err();
        assert!(matches!(err, CreateError::Validation(msg) if msg.contains("abcd")));
    }

    #[test]
    fn contract_arguments() {
        let rw = MemoryReaderWriter::new();
        rw.write(Path::new("contracts/Token.cdc"), b"access(all) contract Token {}")
            .unwrap();

        let contracts = read_contracts(&rw, &["Token:contracts/Token.cdc".to_string()]).unwrap();
        assert_eq!(contracts[0].name, "Token");
        assert!(contracts[0].code.contains("contract Token"));

        assert!(read_contracts(&rw, &["Token".to_string()]).is_err());
        assert!(read_contracts(&rw, &["Missing:Missing.cdc".to_string()]).is_err());
    }

    #[tokio::test]
    async fn unknown_signer_is_not_found() {
        let mut gateway = MockGateway::new();
        gateway.expect_create_account().never();

        let mut opts = options(vec![secp_key()]);
        opts.signer = "nobody".to_string();
        let err = create_with_keys(&state(), &gateway, &opts).await.unwrap_err();

        assert!(matches!(err, CreateError::NotFound(_)));
    }

    #[tokio::test]
    async fn submits_keys_with_resolved_signer() {
        let key = secp_key();
        let expected = key.clone();

        let mut gateway = MockGateway::new();
        gateway
            .expect_create_account()
            .withf(move |signer, keys, contracts| {
                signer.name == EMULATOR_SERVICE_ACCOUNT
                    && keys.len() == 1
                    && keys[0].public_key == expected
                    && contracts.is_empty()
            })
            .times(1)
            .returning(|_, keys, _| {
                Ok(OnChainAccount {
                    address: address!("01cf0e2f2f715450000000000000000000000000"),
                    balance: 100_000,
                    keys: keys.to_vec(),
                    contracts: BTreeMap::new(),
                })
            });

        let account = create_with_keys(&state(), &gateway, &options(vec![key]))
            .await
            .unwrap();
        assert_eq!(account.keys.len(), 1);
    }
}
