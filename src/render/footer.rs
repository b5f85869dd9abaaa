//! Display-footer rendering

use super::fragment::Fragment;
use crate::state::FooterActions;

/// Render the display footer as a pill-style navigation list carrying
/// the captions of the enabled actions only. Suppressed actions stay in
/// the model and reappear here the moment their capability is switched
/// on.
pub fn render_footer(footer: &FooterActions) -> Fragment {
    Fragment::NavPills(
        footer
            .enabled_fields()
            .iter()
            .map(|field| field.value_str().to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FooterCapabilities;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_footer_shows_only_cancel() {
        let footer = FooterActions::new();
        assert_eq!(
            render_footer(&footer),
            Fragment::NavPills(vec!["Dispose".to_string()])
        );
    }

    #[test]
    fn test_enabling_capabilities_exposes_actions() {
        let mut footer = FooterActions::new();
        footer.capabilities = FooterCapabilities {
            cancel: true,
            edit: true,
            save: true,
        };
        assert_eq!(
            render_footer(&footer),
            Fragment::NavPills(vec![
                "Dispose".to_string(),
                "Edit chart".to_string(),
                "Save chart".to_string(),
            ])
        );
    }

    #[test]
    fn test_all_disabled_renders_empty_pill_list() {
        let mut footer = FooterActions::new();
        footer.capabilities = FooterCapabilities {
            cancel: false,
            edit: false,
            save: false,
        };
        assert_eq!(render_footer(&footer), Fragment::NavPills(vec![]));
    }
}
