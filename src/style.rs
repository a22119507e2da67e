use backdrop_core::TitleVisual;
use web_sys as web;

/// Writes the title's visual state onto the document root as CSS custom
/// properties. The page stylesheet decides what to do with them.
pub struct TitleStyle {
    root: web::HtmlElement,
    last: Option<TitleVisual>,
}

impl TitleStyle {
    pub fn new(root: web::HtmlElement) -> Self {
        Self { root, last: None }
    }

    pub fn from_document(document: &web::Document) -> Option<Self> {
        use wasm_bindgen::JsCast;
        document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(Self::new)
    }

    pub fn apply(&mut self, visual: &TitleVisual) {
        if self.last.as_ref() == Some(visual) {
            return;
        }
        let style = self.root.style();
        for (name, value) in visual.css_properties() {
            _ = style.set_property(name, &value);
        }
        self.last = Some(*visual);
    }
}
