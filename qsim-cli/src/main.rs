//! qsim - state-vector quantum simulator
//! Command-line interface running the algorithm and key-distribution demos

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use qsim_algorithms::{BernsteinVazirani, BooleanFunction, DeutschJozsa, FunctionClass, Grover, Qft, Shor};
use qsim_core::{QuantumRegister, SimulatorConfig, bits_to_index};
use qsim_crypto::{Bb84, Bb84Config, Channel, decrypt, encrypt, generate_random_key};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::collections::BTreeMap;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qsim")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.1.16")]
#[command(about = "qsim - state-vector quantum simulator", long_about = None)]
struct Cli {
    /// Seed for the measurement random source (entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare a Bell pair and sample it
    Bell {
        /// Number of measurements
        #[arg(short, long, default_value_t = 100)]
        shots: usize,
    },

    /// Grover search for a single marked state
    Grover {
        /// Number of qubits
        #[arg(short = 'n', long, default_value_t = 2)]
        qubits: usize,

        /// Marked basis state
        #[arg(short, long, default_value_t = 3)]
        target: usize,
    },

    /// Decide whether a boolean function is constant or balanced
    DeutschJozsa {
        /// Number of input qubits
        #[arg(short = 'n', long, default_value_t = 3)]
        inputs: usize,

        /// Function under test
        #[arg(short, long, value_enum, default_value_t = FunctionArg::Parity)]
        function: FunctionArg,

        /// Mask for the masked-parity function
        #[arg(long, default_value_t = 1)]
        mask: u64,
    },

    /// Recover a hidden bit string with one oracle query
    BernsteinVazirani {
        /// Secret bit string, e.g. 1011
        #[arg(value_name = "SECRET")]
        secret: String,
    },

    /// Quantum Fourier transform of a basis state
    Qft {
        /// Number of qubits
        #[arg(short = 'n', long, default_value_t = 3)]
        qubits: usize,

        /// Input basis state
        #[arg(short, long, default_value_t = 1)]
        input: usize,
    },

    /// Factor N with Shor's algorithm
    Shor {
        /// Number to factor
        #[arg(value_name = "N", default_value_t = 15)]
        n: u64,

        /// Base coprime to N
        #[arg(short, long, default_value_t = 2)]
        a: u64,

        /// Maximum circuit runs
        #[arg(long, default_value_t = 10)]
        attempts: usize,
    },

    /// Run a BB84 key exchange
    Bb84 {
        /// Requested key length in bits
        #[arg(short, long, default_value_t = 64)]
        length: usize,

        /// Quantum channel model
        #[arg(short, long, value_enum, default_value_t = ChannelArg::Ideal)]
        channel: ChannelArg,

        /// Noise intensity for the noisy channel
        #[arg(long, default_value_t = 0.05)]
        intensity: f64,

        /// Override the QBER abort threshold
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Generate a random key by measuring |+⟩ qubits
    Keygen {
        /// Key length in bits
        #[arg(short, long, default_value_t = 32)]
        length: usize,
    },

    /// Exchange a key with BB84 and one-time-pad a message with it
    Encrypt {
        /// Plaintext message
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// Show simulator configuration
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum FunctionArg {
    Zero,
    One,
    FirstBit,
    Parity,
    Mask,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChannelArg {
    Ideal,
    Noisy,
    Intercept,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "qsim=debug,qsim_core=debug,qsim_algorithms=debug,qsim_crypto=debug"
    } else {
        "qsim=info,qsim_core=warn,qsim_algorithms=info,qsim_crypto=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let json = cli.json;

    match cli.command {
        Commands::Bell { shots } => bell_command(shots, json, &mut rng),
        Commands::Grover { qubits, target } => grover_command(qubits, target, json, &mut rng),
        Commands::DeutschJozsa { inputs, function, mask } => {
            deutsch_jozsa_command(inputs, function, mask, json, &mut rng)
        }
        Commands::BernsteinVazirani { secret } => bernstein_vazirani_command(&secret, json, &mut rng),
        Commands::Qft { qubits, input } => qft_command(qubits, input, json),
        Commands::Shor { n, a, attempts } => shor_command(n, a, attempts, json, &mut rng),
        Commands::Bb84 {
            length,
            channel,
            intensity,
            threshold,
        } => bb84_command(length, channel, intensity, threshold, json, &mut rng),
        Commands::Keygen { length } => keygen_command(length, json, &mut rng),
        Commands::Encrypt { message } => encrypt_command(&message, json, &mut rng),
        Commands::Info => info_command(json),
    }
}

// ============================================================================
// Output helpers
// ============================================================================

fn bit_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
}

fn print_json(value: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn header(title: &str) {
    println!("{} {}", "==>".blue().bold(), title.bold());
}

// ============================================================================
// Algorithm commands
// ============================================================================

fn bell_command(shots: usize, json: bool, rng: &mut StdRng) -> Result<()> {
    let mut register = QuantumRegister::new(2)?;
    register.hadamard(0)?;
    register.cnot(0, 1)?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for _ in 0..shots {
        let bits = register.clone().measure_all(rng);
        *counts.entry(bit_string(&bits)).or_default() += 1;
    }

    if json {
        return print_json(json!({
            "state": register.snapshot(),
            "shots": shots,
            "counts": counts,
        }));
    }

    header("Bell pair (H on q0, CNOT q0 → q1)");
    println!("  state  {}", register.to_string().cyan());
    for (outcome, count) in &counts {
        println!("  |{}⟩  {:>6}", outcome.green(), count);
    }
    Ok(())
}

fn grover_command(qubits: usize, target: usize, json: bool, rng: &mut StdRng) -> Result<()> {
    let grover = Grover::for_target(qubits, target)?;
    let prepared = grover.prepare()?;
    let success = prepared.probability(target)?;
    let measurement = grover.execute(rng)?;
    let found = bits_to_index(&measurement);

    if json {
        return print_json(json!({
            "qubits": qubits,
            "target": target,
            "iterations": grover.iterations(),
            "success_probability": success,
            "measurement": measurement,
        }));
    }

    header(&format!("Grover search over {} states", 1usize << qubits));
    println!("  iterations           {}", grover.iterations());
    println!("  P(target)            {:.4}", success);
    let verdict = if found == target { "found".green() } else { "missed".yellow() };
    println!("  measured             |{}⟩ ({})", bit_string(&measurement), verdict);
    Ok(())
}

fn deutsch_jozsa_command(
    inputs: usize,
    function: FunctionArg,
    mask: u64,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let function = match function {
        FunctionArg::Zero => BooleanFunction::Constant(false),
        FunctionArg::One => BooleanFunction::Constant(true),
        FunctionArg::FirstBit => BooleanFunction::FirstBit,
        FunctionArg::Parity => BooleanFunction::Parity,
        FunctionArg::Mask => BooleanFunction::Mask(mask),
    };

    let result = DeutschJozsa::new(function, inputs)?.execute(rng)?;

    if json {
        return print_json(json!({
            "function": format!("{function:?}"),
            "result": result,
        }));
    }

    header(&format!("Deutsch-Jozsa on {function:?}"));
    println!("  measurements  {}", bit_string(&result.measurements));
    let class = match result.class {
        FunctionClass::Constant => "constant".green(),
        FunctionClass::Balanced => "balanced".magenta(),
    };
    println!("  function is   {}", class.bold());
    Ok(())
}

fn bernstein_vazirani_command(secret: &str, json: bool, rng: &mut StdRng) -> Result<()> {
    let bits = BernsteinVazirani::from_bit_string(secret)?.execute(rng)?;
    let recovered = bit_string(&bits);

    if json {
        return print_json(json!({ "secret": secret, "recovered": recovered }));
    }

    header("Bernstein-Vazirani");
    println!("  secret     {}", secret);
    println!("  recovered  {}", recovered.green());
    Ok(())
}

fn qft_command(qubits: usize, input: usize, json: bool) -> Result<()> {
    let register = Qft::new(qubits).transform(input)?;

    if json {
        return print_json(json!({ "input": input, "state": register.snapshot() }));
    }

    header(&format!("QFT|{input}⟩ on {qubits} qubits"));
    for (index, amp) in register.amplitudes().iter().enumerate() {
        println!(
            "  |{:0width$b}⟩  {}  |a|²={:.4}",
            index,
            amp,
            amp.norm_sqr(),
            width = qubits
        );
    }
    Ok(())
}

fn shor_command(n: u64, a: u64, attempts: usize, json: bool, rng: &mut StdRng) -> Result<()> {
    let shor = Shor::new(n, a)?;
    let config = SimulatorConfig::from_env();
    if shor.total_qubits() > config.max_qubits {
        bail!(
            "factoring {} needs {} qubits, limit is {} (QSIM_MAX_QUBITS)",
            n,
            shor.total_qubits(),
            config.max_qubits
        );
    }

    let result = shor
        .factor(attempts, rng)
        .with_context(|| format!("Shor failed for N={n}, a={a}"))?;

    if json {
        return print_json(json!({
            "n": n,
            "a": a,
            "qubits": shor.total_qubits(),
            "result": result,
        }));
    }

    header(&format!("Shor: N = {n}, a = {a} ({} qubits)", shor.total_qubits()));
    match &result.measurement {
        Some(bits) => println!(
            "  measurement  {} (attempt {})",
            bit_string(bits),
            result.attempts
        ),
        None => println!("  {}", "gcd(a, N) > 1, no circuit needed".yellow()),
    }
    println!(
        "  factors      {} × {}",
        result.factors.0.to_string().green().bold(),
        result.factors.1.to_string().green().bold()
    );
    Ok(())
}

// ============================================================================
// Cryptography commands
// ============================================================================

fn bb84_command(
    length: usize,
    channel: ChannelArg,
    intensity: f64,
    threshold: Option<f64>,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let mut config = Bb84Config::from_env();
    if let Some(threshold) = threshold {
        config.qber_threshold = threshold;
    }
    let channel = match channel {
        ChannelArg::Ideal => Channel::Ideal,
        ChannelArg::Noisy => Channel::Noisy { intensity },
        ChannelArg::Intercept => Channel::InterceptResend,
    };

    let exchange = Bb84::new(config).with_channel(channel).exchange(length, rng)?;

    if json {
        return print_json(json!({ "channel": format!("{channel:?}"), "exchange": exchange }));
    }

    header(&format!("BB84 over {channel:?} channel"));
    println!("  sifted bits   {}", exchange.sifted_length);
    println!("  sample size   {}", exchange.sample_size);
    println!("  QBER          {:.4}", exchange.error_rate);
    println!("  key           {}", bit_string(&exchange.key).green());
    Ok(())
}

fn keygen_command(length: usize, json: bool, rng: &mut StdRng) -> Result<()> {
    let key = generate_random_key(length, rng);

    if json {
        return print_json(json!({ "key": key }));
    }

    println!("{}", bit_string(&key));
    Ok(())
}

fn encrypt_command(message: &str, json: bool, rng: &mut StdRng) -> Result<()> {
    let required = message.len() * 8;
    let exchange = Bb84::new(Bb84Config::from_env())
        .exchange(required, rng)
        .context("key exchange failed")?;

    let cipher = encrypt(message, &exchange.key)?;
    let recovered = decrypt(&cipher, &exchange.key)?;

    if json {
        return print_json(json!({
            "message": message,
            "key": exchange.key,
            "ciphertext": cipher,
            "decrypted": recovered,
        }));
    }

    header("BB84 + one-time pad");
    println!("  key         {}", bit_string(&exchange.key).dimmed());
    println!("  ciphertext  {}", bit_string(&cipher).yellow());
    println!("  decrypted   {}", recovered.green().bold());
    Ok(())
}

fn info_command(json: bool) -> Result<()> {
    let config = SimulatorConfig::from_env();
    let bb84 = Bb84Config::from_env();

    if json {
        return print_json(json!({ "simulator": config, "bb84": bb84 }));
    }

    println!("{}", "qsim - state-vector quantum simulator".bold());
    println!();
    println!("{}", "Simulator:".bold());
    println!("  max qubits          {}", config.max_qubits);
    println!("  tolerance           {:e}", config.tolerance);
    println!("  display threshold   {:e}", config.display_threshold);
    println!();
    println!("{}", "BB84:".bold());
    println!("  oversampling        {}", bb84.oversampling);
    println!("  sample fraction     {}", bb84.sample_fraction);
    println!("  QBER threshold      {}", bb84.qber_threshold);
    Ok(())
}
