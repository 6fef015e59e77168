use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::infra::{FileStateStore, InMemoryStateStore};
use dog_licensing::config::AppConfig;
use dog_licensing::error::AppError;
use dog_licensing::workflows::licensing::applications::{
    ApplicationId, ApplicationLedger, DogGender, FeeSchedule, LicenseWizard, Notice, Notifier,
    SpayNeuterStatus, StateStore,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Persist demo state to this file instead of process memory
    #[arg(long)]
    pub(crate) state_file: Option<PathBuf>,
    /// Mark the sample dog spayed/neutered (reduced fee)
    #[arg(long)]
    pub(crate) spayed_neutered: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TrackArgs {
    /// Application id from a submission receipt
    pub(crate) application_id: String,
    /// State file holding the applications collection (defaults to APP_STATE_FILE)
    #[arg(long)]
    pub(crate) state_file: Option<PathBuf>,
}

/// Prints wizard notifications the way the web form shows toasts.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("  [{}] {}", notice.level.label(), notice.message);
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    match args.state_file {
        Some(path) => walk_wizard(Arc::new(FileStateStore::new(path)), args.spayed_neutered),
        None => walk_wizard(
            Arc::new(InMemoryStateStore::default()),
            args.spayed_neutered,
        ),
    }
}

fn walk_wizard<S: StateStore + 'static>(store: Arc<S>, spayed: bool) -> Result<(), AppError> {
    println!("Franklin County dog license demo");

    let notifier = Arc::new(ConsoleNotifier);
    let mut wizard = LicenseWizard::mount(store.clone(), notifier, FeeSchedule::default());

    println!(
        "\nStep {}: {}",
        wizard.step().number(),
        wizard.step().label()
    );
    wizard.edit(|draft| {
        draft.owner_name = "Jane Doe".to_string();
        draft.owner_address = "12 Elm St, Chambersburg, PA".to_string();
        draft.owner_phone = "(717) 555-0123".to_string();
    });
    println!("- Owner details captured");
    wizard.advance();

    println!(
        "\nStep {}: {}",
        wizard.step().number(),
        wizard.step().label()
    );
    wizard.edit(|draft| {
        draft.dog_name = "Rex".to_string();
        draft.dog_breed = "Beagle".to_string();
        draft.dog_age = 4;
        draft.dog_gender = Some(DogGender::Male);
        draft.spayed_neutered = Some(if spayed {
            SpayNeuterStatus::Yes
        } else {
            SpayNeuterStatus::No
        });
        draft.rabies_vaccination = "2024-01-01".to_string();
    });
    println!("- Dog details captured");
    wizard.advance();

    println!(
        "\nStep {}: {}",
        wizard.step().number(),
        wizard.step().label()
    );
    let summary = wizard.review_summary();
    println!("- Owner: {}", summary.owner_name);
    println!(
        "- Dog: {} ({}, {} years)",
        summary.dog_name, summary.dog_breed, summary.dog_age
    );
    println!("- Spayed/neutered: {}", summary.spayed_neutered);
    println!("- License fee: {}", summary.fee_display);

    let id = match wizard.submit() {
        Ok(id) => id,
        Err(err) => {
            println!("  Submission failed: {err}");
            return Ok(());
        }
    };

    println!("\nStored application status");
    let ledger = ApplicationLedger::new(store);
    match ledger.find(&id) {
        Ok(Some(application)) => match serde_json::to_string_pretty(&application.status_view()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("  Status payload unavailable: {err}"),
        },
        Ok(None) => println!("  Ledger lookup returned no record"),
        Err(err) => println!("  Ledger unavailable: {err}"),
    }

    println!("\nTrack later with: dog-licensing-api track {}", id.0);
    Ok(())
}

pub(crate) fn run_track(args: TrackArgs) -> Result<(), AppError> {
    let state_file = match args.state_file {
        Some(path) => Some(path),
        None => AppConfig::load()?.storage.state_file,
    };

    let Some(path) = state_file else {
        println!(
            "No state file configured (set APP_STATE_FILE or pass --state-file); \
             in-memory submissions do not outlive the serve process."
        );
        return Ok(());
    };

    let ledger = ApplicationLedger::new(Arc::new(FileStateStore::new(path)));
    let id = ApplicationId(args.application_id);
    match ledger.find(&id)? {
        Some(application) => match serde_json::to_string_pretty(&application.status_view()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Status payload unavailable: {err}"),
        },
        None => println!("No application found for {}", id.0),
    }

    Ok(())
}
