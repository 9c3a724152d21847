mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    orders::{OrderBoard, ALL},
    otp::{OtpFlow, VerifiedLogin},
    phone, AppContext, MemberDraft, TranslationKey, WizardController, WizardError,
};
use shared::{
    domain::{Language, OrderId, Role},
    error::AppError,
};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "printbandhan", about = "Printing press management console")]
struct Cli {
    /// Overrides the configured preference database.
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shows or changes the colour scheme.
    Theme { mode: Option<ThemeArg> },
    /// Shows or changes the interface language.
    Language { language: Option<Language> },
    /// Resolves a dotted translation path in the active language.
    Translate { path: String },
    /// Lists orders through the board filters.
    Orders {
        #[arg(long, default_value = ALL)]
        category: String,
        #[arg(long, default_value = ALL)]
        status: String,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        expand: Option<String>,
    },
    /// Runs the OTP login against the simulated backend.
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        code: String,
    },
    /// Runs the business-profile wizard and prints the dashboard hand-off.
    Onboard(OnboardArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
    Toggle,
}

#[derive(clap::Args, Debug)]
struct OnboardArgs {
    #[arg(long)]
    owner_name: String,
    #[arg(long)]
    press_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long, conflicts_with = "same_as_contact")]
    whatsapp: Option<String>,
    #[arg(long)]
    same_as_contact: bool,
    #[arg(long = "service", required = true)]
    services: Vec<String>,
    #[arg(long = "owner", value_parser = parse_member)]
    owners: Vec<MemberDraft>,
    #[arg(long = "composer", value_parser = parse_member)]
    composers: Vec<MemberDraft>,
    #[arg(long = "operator", value_parser = parse_member)]
    operators: Vec<MemberDraft>,
    #[arg(long)]
    skip_team: bool,
}

/// `NAME:MOBILE`
fn parse_member(raw: &str) -> Result<MemberDraft, String> {
    match raw.rsplit_once(':') {
        Some((name, mobile)) => Ok(MemberDraft::new(name, mobile)),
        None => Err(format!("expected NAME:MOBILE, got `{raw}`")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = config::load_settings()?;
    if let Some(url) = &cli.database_url {
        settings.database_url = config::normalize_database_url(url);
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = match AppContext::open(&settings.database_url, settings.default_language).await {
        Ok(ctx) => ctx,
        Err(err) => {
            error!(database_url = %settings.database_url, error = %err, "startup failed");
            return Err(err);
        }
    };

    let outcome = run(cli.command, &mut ctx, &settings).await;
    ctx.flush().await;
    outcome
}

async fn run(command: Command, ctx: &mut AppContext, settings: &config::Settings) -> Result<()> {
    match command {
        Command::Theme { mode } => {
            let pending = match mode {
                None => None,
                Some(ThemeArg::Dark) => Some(ctx.theme.set_dark_mode(true)),
                Some(ThemeArg::Light) => Some(ctx.theme.set_dark_mode(false)),
                Some(ThemeArg::Toggle) => Some(ctx.theme.toggle()),
            };
            if let Some(pending) = pending {
                if !pending.settled().await {
                    eprintln!("warning: theme could not be saved");
                }
            }
            println!("theme={}", ctx.theme.mode().as_str());
        }
        Command::Language { language } => {
            if let Some(language) = language {
                if !ctx.language.set_language(language).settled().await {
                    eprintln!("warning: language could not be saved");
                }
            }
            println!("language={}", ctx.language.language());
        }
        Command::Translate { path } => {
            println!("{}", ctx.language.t(&path));
        }
        Command::Orders {
            category,
            status,
            search,
            expand,
        } => print_orders(ctx, category, status, search, expand),
        Command::Login { phone, code } => {
            let mut flow = OtpFlow::new(settings.otp_delay());
            let sent_to = flow.send_code(&phone).await.map_err(AppError::from)?;
            println!("code sent to {sent_to}");
            let login = flow.verify(&code).await.map_err(AppError::from)?;
            println!("verified phone={}", login.phone);
        }
        Command::Onboard(args) => onboard(ctx, args)?,
    }
    Ok(())
}

fn print_orders(
    ctx: &AppContext,
    category: String,
    status: String,
    search: String,
    expand: Option<String>,
) {
    let lang = &ctx.language;
    let mut board = OrderBoard::with_seed_orders();
    board.set_category(category);
    board.set_status(status);
    board.set_search(search);
    if let Some(id) = expand {
        board.toggle_expanded(&OrderId::new(id));
    }

    let visible = board.visible();
    if visible.is_empty() {
        println!("{}", lang.text(TranslationKey::NoOrders));
    }
    for order in &visible {
        println!(
            "{}  {:<14} {:<16} {:<18} ₹{:>6}  {} ₹{}",
            order.id,
            order.customer_name,
            order.product_type,
            order.status,
            order.amount,
            lang.text(TranslationKey::PendingAmount),
            order.pending()
        );
        if board.is_expanded(&order.id) {
            println!("    {}: {}", lang.text(TranslationKey::OrderDate), order.order_date);
            println!("    {}: {}", lang.text(TranslationKey::DeliveryDate), order.delivery_date);
            println!("    {}: ₹{}", lang.text(TranslationKey::AdvancePaid), order.advance_paid);
            if let Some(contact) = &order.contact {
                println!("    {}: {contact}", lang.text(TranslationKey::OrderContact));
            }
            if let Some(attachments) = &order.attachments {
                let files = [
                    &attachments.sample,
                    &attachments.order_form,
                    &attachments.voice_note,
                ];
                for file in files.into_iter().flatten() {
                    println!("    📎 {file}");
                }
            }
        }
    }

    let summary = board.summary();
    println!(
        "{} {}, ₹{}, {} ₹{}",
        summary.count,
        lang.text(TranslationKey::OrdersTitle),
        summary.total_amount,
        lang.text(TranslationKey::PendingAmount),
        summary.total_pending
    );
}

fn onboard(ctx: &AppContext, args: OnboardArgs) -> Result<()> {
    let number = phone::normalize(&args.phone);
    if !phone::is_valid(&number) {
        bail!("invalid phone number `{}`", args.phone);
    }
    let login = VerifiedLogin { phone: number };

    let mut wizard = WizardController::start(&login);
    wizard.set_owner_name(&args.owner_name);
    wizard.set_press_name(&args.press_name);
    if args.same_as_contact {
        wizard.set_same_as_contact(true);
    } else if let Some(whatsapp) = &args.whatsapp {
        wizard.set_whatsapp(whatsapp);
    }
    advance(ctx, &mut wizard)?;

    for service in &args.services {
        wizard.toggle_service(service)?;
    }
    advance(ctx, &mut wizard)?;

    let teams = [
        (Role::Owner, args.owners),
        (Role::Composer, args.composers),
        (Role::Operator, args.operators),
    ];
    for (role, drafts) in teams {
        for draft in drafts {
            wizard
                .roster_mut()
                .add(role, draft)
                .map_err(AppError::from)
                .with_context(|| format!("failed to add {}", role.as_str()))?;
        }
    }

    let handoff = if args.skip_team {
        wizard.skip()
    } else {
        wizard.finish()
    };
    let handoff = handoff.map_err(|err| localized(ctx, &wizard, err))?;
    println!("{}", serde_json::to_string_pretty(&handoff)?);
    Ok(())
}

fn advance(ctx: &AppContext, wizard: &mut WizardController) -> Result<()> {
    wizard
        .next()
        .map(|_| ())
        .map_err(|err| localized(ctx, wizard, err))
}

/// Expands a blocked step into one line per invalid field, in the active
/// language.
fn localized(ctx: &AppContext, wizard: &WizardController, err: WizardError) -> anyhow::Error {
    let WizardError::Blocked { .. } = err else {
        return err.into();
    };
    let lines: Vec<String> = wizard
        .errors()
        .to_app_errors(ctx.language.language())
        .into_iter()
        .map(|e| format!("{}: {}", e.field.unwrap_or_default(), e.message))
        .collect();
    anyhow::anyhow!("{err}\n{}", lines.join("\n"))
}
