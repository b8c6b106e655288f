// ============================================================================
// SDK LOADER - Inyección de <link>/<script> del SDK de TomTom
// ============================================================================

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlLinkElement, HtmlScriptElement};

use crate::dom::{append_to_head, create_element, document};
use crate::error::{describe_js, SdkError};
use crate::services::traits::SdkEnvironment;
use crate::utils::tomtom_ffi::sdk_global_present;

/// Entorno real: document.head + window.tt
#[derive(Debug, Default, Clone, Copy)]
pub struct DomSdkEnvironment;

impl DomSdkEnvironment {
    pub fn new() -> Self {
        Self
    }
}

fn asset_error(url: &str, reason: String) -> SdkError {
    SdkError::AssetLoad {
        url: url.to_string(),
        reason,
    }
}

impl SdkEnvironment for DomSdkEnvironment {
    fn sdk_present(&self) -> bool {
        sdk_global_present()
    }

    fn inject_stylesheet(&self, href: &str) -> Result<(), SdkError> {
        let doc = document().ok_or(SdkError::NoDocument)?;
        let selector = format!("link[href=\"{}\"]", href);
        if let Ok(Some(_)) = doc.query_selector(&selector) {
            log::info!("🎨 [SDK] Hoja de estilos ya presente: {}", href);
            return Ok(());
        }

        let link: HtmlLinkElement = create_element("link")
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().map_err(Into::into))
            .map_err(|e| asset_error(href, describe_js(&e)))?;
        link.set_rel("stylesheet");
        link.set_href(href);
        append_to_head(&link).map_err(|e| asset_error(href, describe_js(&e)))?;
        log::info!("🎨 [SDK] Hoja de estilos inyectada: {}", href);
        Ok(())
    }

    async fn load_script(&self, src: &str) -> Result<(), SdkError> {
        if document().is_none() {
            return Err(SdkError::NoDocument);
        }
        let script: HtmlScriptElement = create_element("script")
            .and_then(|el| el.dyn_into::<HtmlScriptElement>().map_err(Into::into))
            .map_err(|e| asset_error(src, describe_js(&e)))?;
        script.set_src(src);

        // onload/onerror resuelven la promesa; se espera antes de seguir
        let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        log::info!("📜 [SDK] Cargando script {}", src);
        append_to_head(&script).map_err(|e| asset_error(src, describe_js(&e)))?;

        let outcome = JsFuture::from(loaded).await;
        script.set_onload(None);
        script.set_onerror(None);

        outcome
            .map(|_| log::info!("✅ [SDK] Script cargado {}", src))
            .map_err(|_| asset_error(src, "script failed to load".to_string()))
    }
}
