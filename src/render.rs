//! Terminal rendering of the recipe screens.

use crate::emphasis::Segment;
use crate::recipe_view::RecipeView;
use colored::Colorize;
use std::fmt::Write;

const PROGRESS_WIDTH: usize = 20;

/// Step text with emphasized segments in bold
pub fn step_text(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.emphasized {
                segment.text.bold().to_string()
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

pub fn overview(view: &RecipeView) -> String {
    let recipe = view.recipe();
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title.bold());
    let _ = writeln!(out, "{} {}", "Time:".dimmed(), recipe.time);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Ingredients".underline());
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  • {} ({})", ingredient.name, ingredient.quantity);
    }

    if let Some(missing) = view.missing_ingredients() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "You may need to buy".yellow());
        for item in missing {
            let _ = writeln!(out, "  • {}", item);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} steps ready. Start cooking when you are.", view.step_count());
    out
}

/// Prep checklist shown before and during cooking
pub fn prep_list(view: &RecipeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Prep List".underline());
    for (i, (ingredient, prepped)) in view.prep_list().enumerate() {
        let mark = if prepped { "[x]".green() } else { "[ ]".normal() };
        let _ = writeln!(
            out,
            "  {:>2}. {} {} ({})",
            i + 1,
            mark,
            ingredient.name,
            ingredient.quantity
        );
    }
    out
}

pub fn cooking_step(view: &RecipeView) -> String {
    let mut out = String::new();
    let filled = (view.progress_fraction() * PROGRESS_WIDTH as f32).round() as usize;
    let _ = writeln!(
        out,
        "{} [{}{}]",
        view.position_label().bold(),
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH.saturating_sub(filled))
    );
    let _ = writeln!(out, "{}", step_text(&view.current_step_segments()));

    if view.progress().show_ingredients() {
        let _ = writeln!(out);
        out.push_str(&prep_list(view));
    }
    out
}
