//! nutriplan binary: serve the web form, or run one plan pass from flags
//! and print each pipeline artifact in submission order.

use clap::{Parser, Subcommand};
use nutriplan::{
    run_plan, HfInference, InferenceClient, MedicalDbVerifier, PlanError, PlanExchange, Profile,
    Verifier, FREE_TIER_LIMIT,
};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "nutriplan")]
#[command(about = "AI Nutrition Diet Planner: profile-templated prompts against the Hugging Face Inference API")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web form server (default).
    Serve {
        /// Listen address (default 127.0.0.1:8080 or NUTRIPLAN_ADDR)
        #[arg(long, value_name = "ADDR")]
        addr: Option<String>,
    },
    /// Run one plan pass and print each artifact.
    Plan {
        /// Nutrition query, dietary concern, or diet preference
        #[arg(short, long, value_name = "TEXT")]
        query: String,

        /// Weight in kg
        #[arg(long, default_value_t = 70.0)]
        weight: f64,

        /// Height in cm
        #[arg(long, default_value_t = 170.0)]
        height: f64,

        /// Activity level: Sedentary, Lightly active, Moderately active, Very active, Extra active
        #[arg(long, default_value = "Sedentary")]
        activity: String,

        /// Food restrictions, if any
        #[arg(long, default_value = "None")]
        restriction: String,

        /// Nutrition goal (e.g., weight loss, muscle gain, maintenance)
        #[arg(long, default_value = "Maintenance")]
        goal: String,

        /// Optional follow-up clarification: a second independent pass with
        /// the same profile
        #[arg(long, value_name = "TEXT")]
        followup: Option<String>,
    },
}

/// Logs go to stderr so `plan` output on stdout stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_addr(addr: Option<String>) -> String {
    addr.or_else(|| std::env::var("NUTRIPLAN_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

/// Prints one exchange the way the form page presents it.
fn print_exchange(exchange: &PlanExchange, followup: bool) {
    if followup {
        println!("Refined Follow-Up Prompt (after free-tier enforcement):");
        println!("{}", exchange.sent_prompt);
        println!();
        println!(
            "Total Follow-Up Prompt Length: {} characters",
            exchange.sent_chars
        );
        if exchange.truncated {
            println!("Warning: your follow-up input was automatically truncated to meet the free-tier limit.");
        }
    } else {
        println!("Engineered Prompt (before free-tier enforcement):");
        println!("{}", exchange.prompt);
        println!();
        println!("Total Prompt Length: {} characters", exchange.sent_chars);
        if exchange.truncated {
            println!("Warning: your nutrition query was automatically truncated to meet the free-tier limit.");
            println!();
            println!("Prompt Sent (after free-tier enforcement):");
            println!("{}", exchange.sent_prompt);
        }
    }
    println!();
    println!("Response:");
    println!("{}", exchange.response);
    println!();
    if exchange.verification.verified {
        println!("Verification Successful: {}", exchange.verification.message);
    } else {
        println!("Verification Warning: {}", exchange.verification.message);
    }
}

async fn run_plan_cmd(
    query: String,
    weight: f64,
    height: f64,
    activity: String,
    restriction: String,
    goal: String,
    followup: Option<String>,
) -> i32 {
    let settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let activity = match activity.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    let profile = Profile {
        weight_kg: weight,
        height_cm: height,
        activity,
        restriction,
        goal,
    };

    let client = HfInference::new(settings.api_key.clone());
    let verifier = MedicalDbVerifier;
    let limit = settings.free_tier_limit.unwrap_or(FREE_TIER_LIMIT);

    if let Some(code) = run_one_pass(&client, &verifier, &profile, &query, limit, false).await {
        return code;
    }

    if let Some(clarification) = followup {
        println!();
        println!("--- Follow-Up ---");
        if let Some(code) =
            run_one_pass(&client, &verifier, &profile, &clarification, limit, true).await
        {
            return code;
        }
    }

    0
}

/// Runs one pipeline pass and prints it; returns an exit code on failure.
async fn run_one_pass(
    client: &dyn InferenceClient,
    verifier: &dyn Verifier,
    profile: &Profile,
    query: &str,
    limit: usize,
    followup: bool,
) -> Option<i32> {
    match run_plan(client, verifier, profile, query, limit).await {
        Ok(exchange) => {
            print_exchange(&exchange, followup);
            None
        }
        Err(PlanError::EmptyQuery) => {
            eprintln!("Please enter your nutrition query or dietary preferences.");
            Some(2)
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = config::load_and_apply(None) {
        eprintln!("config: {e}");
    }

    let args = Args::parse();
    let code = match args.cmd.unwrap_or(Command::Serve { addr: None }) {
        Command::Serve { addr } => {
            let addr = resolve_addr(addr);
            match serve::run_serve(Some(&addr)).await {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{e}");
                    1
                }
            }
        }
        Command::Plan {
            query,
            weight,
            height,
            activity,
            restriction,
            goal,
            followup,
        } => run_plan_cmd(query, weight, height, activity, restriction, goal, followup).await,
    };
    std::process::exit(code);
}
