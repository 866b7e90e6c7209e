//! CLI command for showing and changing settings

use clap::Args;

use crate::config::{InvalidDatePolicy, Settings, TrackerPaths};
use crate::error::ExpenseResult;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Symbol printed before amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// What `report` does with dates that aren't real (abort or skip)
    #[arg(long)]
    pub invalid_date_policy: Option<InvalidDatePolicy>,

    /// Record add/update/delete in the audit log
    #[arg(long)]
    pub audit: Option<bool>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some() || self.invalid_date_policy.is_some() || self.audit.is_some()
    }

    /// Apply the given options to `settings`
    pub fn apply(self, settings: &mut Settings) {
        if let Some(currency) = self.currency {
            settings.currency_symbol = currency;
        }
        if let Some(policy) = self.invalid_date_policy {
            settings.invalid_date_policy = policy;
        }
        if let Some(audit) = self.audit {
            settings.audit_enabled = audit;
        }
    }
}

/// Handle the config command: save any changes, then print paths and settings
pub fn handle_config_command(
    paths: &TrackerPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if args.has_changes() {
        args.apply(&mut settings);
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Expense file:   {}", paths.expenses_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Invalid date policy: {}", settings.invalid_date_policy);
    println!("  Audit log enabled:   {}", settings.audit_enabled);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_only_given_fields() {
        let mut settings = Settings::default();
        let args = ConfigArgs {
            invalid_date_policy: Some("skip".parse().unwrap()),
            ..ConfigArgs::default()
        };

        args.apply(&mut settings);

        assert_eq!(settings.invalid_date_policy, InvalidDatePolicy::Skip);
        assert_eq!(settings.currency_symbol, "₹");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_changes_are_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let args = ConfigArgs {
            currency: Some("$".into()),
            audit: Some(false),
            ..ConfigArgs::default()
        };

        handle_config_command(&paths, Settings::default(), args).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency_symbol, "$");
        assert!(!reloaded.audit_enabled);
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_no_options_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_config_command(&paths, Settings::default(), ConfigArgs::default()).unwrap();

        assert!(!paths.is_initialized());
    }
}
