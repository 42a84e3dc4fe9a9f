use libras_core::language::LanguageProcessor;
use libras_core::types::{Annotation, LanguageDetection};

use crate::language::display_name;
use crate::{Classifier, ClassifierError};

/// Identify the language of `text` and, when it is not the processor's
/// primary language, re-run the translation wrapped in a warning.
///
/// A classifier error is returned as-is; the caller reports it as a display
/// value and the already composed translation stays untouched.
pub async fn annotate(
    text: &str,
    classifier: &dyn Classifier,
    processor: &dyn LanguageProcessor,
) -> Result<Annotation, ClassifierError> {
    let code = classifier.identify(text).await?;
    let language_name = display_name(&code);
    tracing::debug!("Detected language '{}' ({})", code, language_name);

    let primary = processor.language_code();
    let final_text = if code != primary {
        let translation = processor.translate(text).composed_text;
        Some(warning_wrap(&language_name, &display_name(primary), &translation))
    } else {
        None
    };

    Ok(Annotation {
        detection: LanguageDetection {
            code,
            display_name: language_name,
        },
        final_text,
    })
}

fn warning_wrap(detected: &str, primary: &str, translation: &str) -> String {
    format!(
        "⚠️ AVISO: Texto em {detected} detectado!\n\n\
         Para melhor precisão na tradução para LIBRAS (Língua Brasileira de Sinais), \
         recomendamos usar textos em {}.\n\n\
         Tradução disponível:\n\n{translation}",
        primary.to_lowercase()
    )
}
