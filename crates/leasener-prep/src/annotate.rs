//! Model-assisted annotation of raw text.

use leasener_core::{EntityAnnotation, Model, Result, TrainingExample, evaluate};

/// Run `model` over `text` and keep what it finds as annotations.
pub fn annotate_text(model: &Model, text: &str) -> Result<TrainingExample> {
    let entities = evaluate(model, text)?
        .into_iter()
        .map(|ent| EntityAnnotation::new(ent.start, ent.end, ent.label))
        .collect();
    Ok(TrainingExample::new(text, entities))
}

/// One example per line, in order.
pub fn annotate_lines<'a, I>(model: &Model, lines: I) -> Result<Vec<TrainingExample>>
where
    I: IntoIterator<Item = &'a str>,
{
    let examples = lines
        .into_iter()
        .map(|line| annotate_text(model, line))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(examples = examples.len(), "annotated lines");
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::split_lines;
    use leasener_core::labels::DATE;

    fn ruler_model() -> Model {
        let mut model = Model::blank("en");
        model.add_ruler().unwrap();
        model
    }

    #[test]
    fn test_annotate_lines() {
        let text = "The said Lease is amended, effective September 25, 2012,\n\
                    consideration of the agreements hereinafter set forth\n";
        let examples = annotate_lines(&ruler_model(), split_lines(text)).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].entities, vec![EntityAnnotation::new(37, 55, DATE)]);
        assert!(examples[1].entities.is_empty());
    }

    #[test]
    fn test_annotations_are_valid_examples() {
        let example =
            annotate_text(&ruler_model(), "made this 21st day of November, 2018, by").unwrap();
        let labels = leasener_core::LabelSet::from_labels([DATE]);
        example.validate(&labels).unwrap();
        assert_eq!(example.span_text(&example.entities[0]), "21st day of November, 2018");
    }
}
