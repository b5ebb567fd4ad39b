//! Sprite preloading and lookup
//!
//! Every image the game draws is fetched up front; the game only boots once
//! the last one has fired its load event, so [`Resources::get`] is infallible
//! afterwards.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Relative sprite URLs
pub mod sprites {
    pub const STONE: &str = "images/stone-block.png";
    pub const WATER: &str = "images/water-block.png";
    pub const GRASS: &str = "images/grass-block.png";
    pub const ENEMY: &str = "images/enemy-bug.png";
    pub const HEART: &str = "images/Heart.png";
    pub const GEM_BLUE: &str = "images/Gem Blue.png";
    pub const GEM_GREEN: &str = "images/Gem Green.png";
    pub const GEM_ORANGE: &str = "images/Gem Orange.png";
    pub const ROCK: &str = "images/Rock.png";

    /// Selectable hero sprites, in roster order
    pub const CHARACTERS: [&str; 5] = [
        "images/char-boy.png",
        "images/char-cat-girl.png",
        "images/char-horn-girl.png",
        "images/char-pink-girl.png",
        "images/char-princess-girl.png",
    ];

    /// Everything the game ever draws
    pub const ALL: [&str; 14] = [
        STONE,
        WATER,
        GRASS,
        ENEMY,
        HEART,
        GEM_BLUE,
        GEM_GREEN,
        GEM_ORANGE,
        ROCK,
        CHARACTERS[0],
        CHARACTERS[1],
        CHARACTERS[2],
        CHARACTERS[3],
        CHARACTERS[4],
    ];
}

/// Image cache keyed by sprite URL
pub struct Resources {
    images: HashMap<&'static str, HtmlImageElement>,
}

impl Resources {
    /// Fetch every sprite and resolve once all have loaded
    pub async fn load(urls: &[&'static str]) -> Result<Self, JsValue> {
        let mut images = HashMap::with_capacity(urls.len());
        for &url in urls {
            let image = HtmlImageElement::new()?;
            let loaded = js_sys::Promise::new(&mut |resolve, reject| {
                image.set_onload(Some(&resolve));
                image.set_onerror(Some(&reject));
            });
            image.set_src(url);
            JsFuture::from(loaded).await?;
            images.insert(url, image);
        }
        log::info!("loaded {} sprites", images.len());
        Ok(Self { images })
    }

    /// Cached image for `url`. Panics for URLs that were never preloaded,
    /// which is a programming error rather than a runtime condition.
    pub fn get(&self, url: &str) -> &HtmlImageElement {
        self.images
            .get(url)
            .unwrap_or_else(|| panic!("sprite not preloaded: {url}"))
    }
}
