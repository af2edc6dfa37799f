use log::debug;
use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

/// Starts a background fetch for every url. Nothing is awaited and load
/// failures never reach the caller; the browser cache does the rest.
pub fn preload_images<I, S>(urls: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for url in urls {
        let url = url.as_ref();
        if let Err(err) = request_image(url) {
            debug!("Could not start preload for {}: {:?}", url, err);
        }
    }
}

fn request_image(url: &str) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(url);
    Ok(())
}
