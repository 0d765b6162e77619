use serde::Serialize;

use delta_core::enums::Category;
use delta_core::framework::answer_key;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IndicatorView {
    id: &'static str,
    label: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct QuestionView {
    /// Answer-map key for this question, e.g. `"0_2"`.
    key: String,
    text: &'static str,
    indicator_id: &'static str,
}

#[derive(Debug, Serialize)]
struct CategoryView {
    category: Category,
    label: &'static str,
    description: &'static str,
    indicators: Vec<IndicatorView>,
    questions: Vec<QuestionView>,
}

/// Print the framework tables, primarily so evaluation payloads can be
/// written against the real answer keys.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories: Vec<CategoryView> = Category::ALL
        .into_iter()
        .map(|category| {
            let def = category.definition();
            CategoryView {
                category,
                label: def.label,
                description: def.description,
                indicators: def
                    .indicators
                    .iter()
                    .map(|ind| IndicatorView {
                        id: ind.id,
                        label: ind.label,
                        description: ind.description,
                    })
                    .collect(),
                questions: category
                    .questions()
                    .iter()
                    .enumerate()
                    .map(|(i, q)| QuestionView {
                        key: answer_key(category, i),
                        text: q.text,
                        indicator_id: q.indicator_id,
                    })
                    .collect(),
            }
        })
        .collect();
    output(&categories, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_category_exposes_three_keyed_questions() {
        let def = Category::Assessment.definition();
        assert_eq!(def.questions.len(), 3);
        assert_eq!(answer_key(Category::Assessment, 0), "4_0");
    }
}
