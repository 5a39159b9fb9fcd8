use std::{
	io::{Read as _, Write as _},
	path::{Path, PathBuf},
	str::FromStr as _,
};

use base64::Engine as _;
use clap::Parser as _;
use color_eyre::eyre::Context as _;
use did_key::{
	crypto::rsa::{self, PublicKeyParts as _},
	DidKey, KeyAlgo, VerificationKey,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PEM_PREAMBLE: &[u8] = b"-----BEGIN";

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
	/// Encodes a public key as a did:key.
	Encode {
		/// One of ed25519, rsa or secp256k1.
		#[clap(long, short, env = "DIDKEY_ALGO")]
		algo: String,
		/// File with the raw public key, or `-` for stdin. RSA keys are
		/// SubjectPublicKeyInfo, either DER or PEM.
		#[clap(default_value = "-")]
		file: PathBuf,
	},
	/// Decodes a did:key and prints the public key it holds.
	Decode {
		did: String,
		#[clap(long, short, env = "DIDKEY_OUTPUT", value_enum, default_value_t = Output::Text)]
		output: Output,
	},
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
enum Output {
	/// A summary of the did, with the key as base64.
	Text,
	/// Only the key, as base64.
	Base64,
	/// Only the key bytes.
	Raw,
}

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or("info".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let cli = Cli::parse();
	let mut stdout = std::io::stdout().lock();
	match cli.command {
		Commands::Encode { algo, file } => {
			let key = read_input(&file)?;
			let did = encode(&algo, &key)?;
			info!(algo = %did.algo(), "encoded did");
			writeln!(stdout, "{did}")?;
		}
		Commands::Decode { did, output } => {
			let did = DidKey::from_str(did.trim())
				.wrap_err_with(|| format!("failed to decode {did:?}"))?;
			info!(algo = %did.algo(), "decoded did");
			stdout.write_all(&render(&did, output)?)?;
		}
	}
	stdout.flush()?;

	Ok(())
}

fn read_input(path: &Path) -> color_eyre::Result<Vec<u8>> {
	if path == Path::new("-") {
		debug!("reading key from stdin");
		let mut buf = Vec::new();
		std::io::stdin()
			.read_to_end(&mut buf)
			.wrap_err("failed to read key from stdin")?;
		return Ok(buf);
	}
	debug!(path = %path.display(), "reading key from file");
	std::fs::read(path)
		.wrap_err_with(|| format!("failed to read key from {}", path.display()))
}

fn encode(algo: &str, key: &[u8]) -> color_eyre::Result<DidKey> {
	let algo = KeyAlgo::from_str(algo.trim())?;
	debug!(%algo, len = key.len(), "encoding key");
	let did = match algo {
		KeyAlgo::Rsa if key.starts_with(PEM_PREAMBLE) => {
			let pem =
				std::str::from_utf8(key).wrap_err("pem encoded key is not utf8")?;
			let key = rsa::from_spki_pem(pem).wrap_err("invalid pem rsa key")?;
			DidKey::from_rsa(&key)?
		}
		_ => DidKey::new(algo, key.to_vec())
			.wrap_err_with(|| format!("not a valid {algo} public key"))?,
	};

	Ok(did)
}

fn render(did: &DidKey, output: Output) -> color_eyre::Result<Vec<u8>> {
	let b64 = || base64::engine::general_purpose::STANDARD.encode(did.raw());
	Ok(match output {
		Output::Raw => did.raw().to_vec(),
		Output::Base64 => format!("{}\n", b64()).into_bytes(),
		Output::Text => {
			let verification_key = did
				.verification_key()
				.wrap_err("failed to get verification key")?;
			format!(
				"did: {did}\nalgorithm: {}\nmulticodec: {:#x}\nkey: {}\nverification key: {}\n",
				did.algo(),
				did.multicodec_value(),
				b64(),
				describe(&verification_key),
			)
			.into_bytes()
		}
	})
}

fn describe(key: &VerificationKey) -> String {
	match key {
		VerificationKey::Rsa(key) => format!("rsa, {} bit modulus", key.size() * 8),
		VerificationKey::Ed25519(key) => match key.try_into_verifying_key() {
			Ok(_) => "ed25519".to_owned(),
			Err(err) => format!("ed25519, unusable: {err}"),
		},
		VerificationKey::Secp256k1(point) => {
			let form = if point.is_compressed() {
				"compressed"
			} else {
				"uncompressed"
			};
			match point.to_k256() {
				Ok(_) => format!("secp256k1, {form} point"),
				Err(_) => format!("secp256k1, {form} point, not on the curve"),
			}
		}
	}
}
