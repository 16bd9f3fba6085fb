use facture_layout::{LayoutElement, PositionedElement, RectElement, TextElement};
use facture_render_core::{DocumentRenderer, RenderError};
use facture_style::{FontFamily, PageGeometry};
use facture_types::{Color, ImageResource};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then serializes it on `finish`.
pub struct LopdfDocumentRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    geometry: PageGeometry,
    title: String,
    font_dict: Dictionary,
    xobject_dict: Dictionary,
    ext_gstate_dict: Dictionary,
    image_xobjects: HashMap<String, String>,
    alpha_states: HashMap<u16, String>,
}

impl LopdfDocumentRenderer {
    pub fn new(geometry: PageGeometry, title: &str) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            geometry,
            title: title.to_string(),
            font_dict: Dictionary::new(),
            xobject_dict: Dictionary::new(),
            ext_gstate_dict: Dictionary::new(),
            image_xobjects: HashMap::new(),
            alpha_states: HashMap::new(),
        }
    }

    /// Internal resource name for a builtin face. All three faces are
    /// registered up front in `begin_document`.
    fn font_name(family: FontFamily) -> &'static str {
        match family {
            FontFamily::Helvetica => "F1",
            FontFamily::HelveticaBold => "F2",
            FontFamily::HelveticaOblique => "F3",
        }
    }

    /// WinAnsi has no encoding for anything past U+00FF; those code points
    /// byte-replace with '?' rather than corrupting the text run.
    fn winansi_bytes(text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| {
                let cp = c as u32;
                if cp < 256 { cp as u8 } else { b'?' }
            })
            .collect()
    }

    /// Returns the `/GSn` name registered for this alpha, creating the
    /// ExtGState object on first use.
    fn alpha_state_name(&mut self, alpha: f32) -> String {
        let key = (alpha.clamp(0.0, 1.0) * 1000.0) as u16;
        if let Some(name) = self.alpha_states.get(&key) {
            return name.clone();
        }
        let name = format!("GS{}", self.alpha_states.len() + 1);
        let state_id = self.document.add_object(dictionary! {
            "Type" => "ExtGState",
            "ca" => alpha,
            "CA" => alpha,
        });
        self.ext_gstate_dict.set(name.as_bytes(), Object::Reference(state_id));
        self.alpha_states.insert(key, name.clone());
        name
    }

    fn set_fill_color(content: &mut Content, color: Color) {
        content.operations.push(Operation::new(
            "rg",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        ));
    }

    fn set_stroke_color(content: &mut Content, color: Color) {
        content.operations.push(Operation::new(
            "RG",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        ));
    }

    fn draw_rect(&self, content: &mut Content, el: &PositionedElement, rect: &RectElement) {
        // Flip into PDF space: origin bottom-left.
        let y = self.geometry.height - el.y - el.height;
        if let Some(fill) = rect.fill {
            Self::set_fill_color(content, fill);
            content.operations.push(Operation::new(
                "re",
                vec![el.x.into(), y.into(), el.width.into(), el.height.into()],
            ));
            content.operations.push(Operation::new("f", vec![]));
        }
        if let Some(stroke) = &rect.stroke {
            content.operations.push(Operation::new("w", vec![stroke.width.into()]));
            Self::set_stroke_color(content, stroke.color);
            content.operations.push(Operation::new(
                "re",
                vec![el.x.into(), y.into(), el.width.into(), el.height.into()],
            ));
            content.operations.push(Operation::new("S", vec![]));
        }
    }

    fn draw_text(&mut self, content: &mut Content, el: &PositionedElement, text: &TextElement) {
        let style = &text.style;
        let translucent = !style.color.is_opaque();
        if translucent {
            let gs_name = self.alpha_state_name(style.color.a);
            content.operations.push(Operation::new("q", vec![]));
            content
                .operations
                .push(Operation::new("gs", vec![Object::Name(gs_name.into_bytes())]));
        }

        content.operations.push(Operation::new("BT", vec![]));
        content.operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(Self::font_name(style.family).as_bytes().to_vec()),
                style.size.into(),
            ],
        ));
        Self::set_fill_color(content, style.color);
        let baseline = self.geometry.height - el.y - style.size;
        content
            .operations
            .push(Operation::new("Td", vec![el.x.into(), baseline.into()]));
        content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                Self::winansi_bytes(&text.content),
                StringFormat::Literal,
            )],
        ));
        content.operations.push(Operation::new("ET", vec![]));

        if translucent {
            content.operations.push(Operation::new("Q", vec![]));
        }
    }

    fn draw_image(&self, content: &mut Content, el: &PositionedElement, src: &str) {
        let Some(internal_name) = self.image_xobjects.get(src) else {
            // A layout element referencing a raster that was never
            // registered; skip drawing it rather than failing the page.
            log::warn!("image resource not registered, skipping render: {}", src);
            return;
        };
        let y = self.geometry.height - el.y - el.height;
        content.operations.push(Operation::new("q", vec![]));
        content.operations.push(Operation::new(
            "cm",
            vec![
                el.width.into(),
                0.into(),
                0.into(),
                el.height.into(),
                el.x.into(),
                y.into(),
            ],
        ));
        content.operations.push(Operation::new(
            "Do",
            vec![Object::Name(internal_name.as_bytes().to_vec())],
        ));
        content.operations.push(Operation::new("Q", vec![]));
    }
}

impl DocumentRenderer for LopdfDocumentRenderer {
    fn begin_document(&mut self) -> Result<(), RenderError> {
        for family in [
            FontFamily::Helvetica,
            FontFamily::HelveticaBold,
            FontFamily::HelveticaOblique,
        ] {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => family.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            self.font_dict
                .set(Self::font_name(family).as_bytes(), Object::Reference(font_id));
        }

        // The root Pages object; Kids and Count are patched in finish().
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![]),
            "Count" => 0,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        let catalog_id = self.document.add_object(catalog_dict);
        self.document.trailer.set("Root", catalog_id);

        Ok(())
    }

    fn add_resources(
        &mut self,
        resources: &HashMap<String, ImageResource>,
    ) -> Result<(), RenderError> {
        for (name, image) in resources {
            let expected = (image.pixel_width * image.pixel_height * 3) as usize;
            if image.rgb.len() != expected {
                return Err(RenderError::Pdf(format!(
                    "image '{}' has {} bytes of pixel data, expected {}",
                    name,
                    image.rgb.len(),
                    expected
                )));
            }
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => image.pixel_width as i64,
                    "Height" => image.pixel_height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                image.rgb.as_ref().clone(),
            );
            let xobject_id = self.document.add_object(stream);
            let internal_name = format!("Im{}", self.image_xobjects.len() + 1);
            self.xobject_dict
                .set(internal_name.as_bytes(), Object::Reference(xobject_id));
            self.image_xobjects.insert(name.clone(), internal_name);
        }
        Ok(())
    }

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let mut content = Content { operations: vec![] };
        for el in elements {
            match &el.element {
                LayoutElement::Rect(rect) => self.draw_rect(&mut content, el, rect),
                LayoutElement::Text(text) => self.draw_text(&mut content, el, text),
                LayoutElement::Image(image) => self.draw_image(&mut content, el, &image.src),
            }
        }

        let content_stream = Stream::new(dictionary! {}, content.encode()?);
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.geometry.width.into(),
                self.geometry.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);

        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let mut renderer = *self;

        let mut resources = dictionary! {
            "Font" => renderer.font_dict,
        };
        if !renderer.xobject_dict.is_empty() {
            resources.set("XObject", Object::Dictionary(renderer.xobject_dict));
        }
        if !renderer.ext_gstate_dict.is_empty() {
            resources.set("ExtGState", Object::Dictionary(renderer.ext_gstate_dict));
        }
        renderer
            .document
            .objects
            .insert(renderer.resources_id, Object::Dictionary(resources));

        if let Some(Object::Dictionary(pages_dict)) =
            renderer.document.objects.get_mut(&renderer.pages_id)
        {
            let kids: Vec<Object> = renderer.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", renderer.page_ids.len() as i32);
        }

        let info_id = renderer.document.add_object(dictionary! {
            "Title" => Object::String(
                LopdfDocumentRenderer::winansi_bytes(&renderer.title),
                StringFormat::Literal,
            ),
            "Producer" => Object::string_literal("facture"),
        });
        renderer.document.trailer.set("Info", info_id);

        renderer.document.compress();
        let mut bytes = Vec::new();
        renderer.document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
