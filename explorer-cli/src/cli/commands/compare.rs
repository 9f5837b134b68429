//! `compare` command

use anyhow::{Result, anyhow};

use super::load_error;
use crate::api::ApiError;
use crate::cli::{AppContext, render};
use crate::views::{CompareSlot, CompareView};

/// Fill `slot` from a code, an exact name, or a name fragment matching one country
pub fn resolve_selection(view: &mut CompareView, slot: CompareSlot, input: &str) -> Result<()> {
    match view.select(slot, input) {
        Ok(()) => return Ok(()),
        Err(e) if !e.is_not_found() => return Err(load_error(e, "countries")),
        Err(_) => {}
    }

    let wanted = input.trim();
    let (chosen, names, total) = {
        let candidates = view.candidates(wanted);
        let chosen = candidates
            .iter()
            .find(|c| c.common_name().eq_ignore_ascii_case(wanted))
            .or_else(|| match candidates.as_slice() {
                [only] => Some(only),
                _ => None,
            })
            .map(|c| c.code.clone());
        let names: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|c| format!("{} ({})", c.common_name(), c.code))
            .collect();
        (chosen, names, candidates.len())
    };

    if let Some(code) = chosen {
        return view
            .select(slot, &code)
            .map_err(|e| load_error(e, "countries"));
    }

    if total == 0 {
        return Err(load_error(ApiError::not_found(wanted), "countries"));
    }

    let more = if total > names.len() { ", ..." } else { "" };
    Err(anyhow!(
        "\"{}\" matches several countries: {}{}",
        wanted,
        names.join(", "),
        more
    ))
}

pub async fn handle_compare_command(first: &str, second: &str, ctx: &AppContext) -> Result<()> {
    let repo = ctx.repo.as_ref();
    let mut view = CompareView::load(repo)
        .await
        .map_err(|e| load_error(e, "countries"))?;

    resolve_selection(&mut view, CompareSlot::First, first)?;
    resolve_selection(&mut view, CompareSlot::Second, second)?;

    let comparison = view
        .comparison(repo)
        .await
        .map_err(|e| load_error(e, "country details"))?
        .ok_or_else(|| anyhow!("Select two countries to compare."))?;

    render::print_comparison(&comparison, ctx.theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeRepository, country, summary};

    fn view() -> CompareView {
        CompareView::from_dataset(vec![
            summary("NIG", "Niger", "Africa", 25_000_000),
            summary("NGA", "Nigeria", "Africa", 206_000_000),
            summary("NOR", "Norway", "Europe", 5_400_000),
            summary("SWE", "Sweden", "Europe", 10_300_000),
        ])
    }

    async fn selected_codes(view: &CompareView) -> (String, String) {
        let repo = FakeRepository::new(vec![
            country("NIG", "Niger", "Africa", 25_000_000),
            country("NGA", "Nigeria", "Africa", 206_000_000),
            country("NOR", "Norway", "Europe", 5_400_000),
            country("SWE", "Sweden", "Europe", 10_300_000),
        ]);
        let comparison = view.comparison(&repo).await.unwrap().unwrap();
        (comparison.left_code, comparison.right_code)
    }

    #[tokio::test]
    async fn test_resolve_by_code_and_fragment() {
        let mut view = view();
        resolve_selection(&mut view, CompareSlot::First, "swe").unwrap();
        resolve_selection(&mut view, CompareSlot::Second, "orw").unwrap();

        assert_eq!(
            selected_codes(&view).await,
            ("SWE".to_string(), "NOR".to_string())
        );
    }

    #[tokio::test]
    async fn test_exact_name_wins_over_longer_match() {
        let mut view = view();
        resolve_selection(&mut view, CompareSlot::First, "niger").unwrap();
        resolve_selection(&mut view, CompareSlot::Second, "Nigeria").unwrap();

        assert_eq!(
            selected_codes(&view).await,
            ("NIG".to_string(), "NGA".to_string())
        );
    }

    #[test]
    fn test_ambiguous_and_unknown_input() {
        let mut view = view();

        let err = resolve_selection(&mut view, CompareSlot::First, "n").unwrap_err();
        assert!(err.to_string().starts_with("\"n\" matches several countries: Niger (NIG)"));

        let err = resolve_selection(&mut view, CompareSlot::First, "atlantis").unwrap_err();
        assert_eq!(err.to_string(), "No country found with code \"atlantis\".");
    }
}
