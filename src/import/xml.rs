//! Class model XML importer
//!
//! Parses the UML-like XML interchange format into an in-memory
//! [`ClassModel`]. The importer scans for `Class` and `Aggregation` elements
//! wherever they occur; no cross-validation between the two record streams is
//! performed here.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::import::ImportError;
use crate::models::{AggregationEdge, Attribute, ClassDef, ClassModel};

/// Class model XML importer
///
/// Imports class model XML content into a [`ClassModel`].
#[derive(Debug, Default)]
pub struct XMLImporter {
    /// Non-fatal anomalies encountered during parsing
    pub warnings: Vec<String>,
}

impl XMLImporter {
    /// Create a new XMLImporter
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Validate that the model XML is well-formed.
    ///
    /// Scans the full document without building anything. Structural
    /// problems (unclosed tags, bad attribute syntax) surface here with the
    /// byte position of the failure.
    ///
    /// # Arguments
    ///
    /// * `xml_content` - The class model XML content as a string.
    ///
    /// # Returns
    ///
    /// A `Result` indicating whether the document is well-formed.
    pub fn validate(&self, xml_content: &str) -> Result<()> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ImportError::ParseError(format!(
                        "model XML parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )))
                    .context("model XML validation failed");
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Import class model XML content into a [`ClassModel`].
    ///
    /// Collects `Class` elements (with their nested `Attribute` elements, in
    /// declaration order) and `Aggregation` elements, then folds the edges
    /// into the class mapping via [`ClassModel::build`].
    ///
    /// Missing `documentation` defaults to an empty string and a missing
    /// `isRoot` to false; only the literal `"true"` marks a root. Duplicate
    /// class names are tolerated (the later definition overwrites the
    /// earlier one). A required attribute that is absent is a fatal parse
    /// failure.
    ///
    /// # Arguments
    ///
    /// * `xml_content` - The class model XML content as a string.
    ///
    /// # Returns
    ///
    /// A `Result` containing the built `ClassModel`, or an error if parsing
    /// fails.
    pub fn import(&mut self, xml_content: &str) -> Result<ClassModel> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        let mut parse = ModelParse::default();

        loop {
            match reader.read_event() {
                // An empty `Class` element has no nested attributes and is
                // complete immediately; a started one collects `Attribute`
                // elements until its end tag.
                Ok(Event::Start(ref e)) => self.handle_element(e, false, &mut parse)?,
                Ok(Event::Empty(ref e)) => self.handle_element(e, true, &mut parse)?,
                Ok(Event::End(ref e)) => {
                    if e.local_name().as_ref() == b"Class" {
                        if let Some(class) = parse.current.take() {
                            parse.classes.push(class);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ImportError::ParseError(format!(
                        "model XML parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )))
                    .context("model XML import failed");
                }
                _ => {}
            }
        }

        Ok(ClassModel::build(parse.classes, parse.aggregations))
    }

    fn handle_element(
        &mut self,
        e: &BytesStart,
        is_empty: bool,
        parse: &mut ModelParse,
    ) -> Result<()> {
        let local_name_bytes = e.local_name();
        let local_name = String::from_utf8_lossy(local_name_bytes.as_ref()).to_string();

        match local_name.as_str() {
            "Class" => {
                let class = self.parse_class(e)?;
                if is_empty {
                    parse.classes.push(class);
                } else {
                    parse.current = Some(class);
                }
            }
            "Attribute" => {
                let attribute = self.parse_attribute(e)?;
                match parse.current.as_mut() {
                    Some(class) => class.attributes.push(attribute),
                    None => {
                        self.warnings.push(format!(
                            "Attribute '{}' declared outside a Class element, skipping",
                            attribute.name
                        ));
                    }
                }
            }
            "Aggregation" => {
                parse.aggregations.push(self.parse_aggregation(e)?);
            }
            _ => {}
        }

        Ok(())
    }

    fn parse_class(&self, e: &BytesStart) -> Result<ClassDef> {
        let name = get_attr(e, "name")
            .ok_or_else(|| ImportError::MissingAttribute("Class requires 'name'".to_string()))?;
        let mut class = ClassDef::new(name);
        class.is_root = get_attr(e, "isRoot").as_deref() == Some("true");
        class.documentation = get_attr(e, "documentation").unwrap_or_default();
        Ok(class)
    }

    fn parse_attribute(&self, e: &BytesStart) -> Result<Attribute> {
        let name = get_attr(e, "name").ok_or_else(|| {
            ImportError::MissingAttribute("Attribute requires 'name'".to_string())
        })?;
        let attr_type = get_attr(e, "type").ok_or_else(|| {
            ImportError::MissingAttribute(format!("Attribute '{}' requires 'type'", name))
        })?;
        Ok(Attribute { name, attr_type })
    }

    fn parse_aggregation(&self, e: &BytesStart) -> Result<AggregationEdge> {
        let source = get_attr(e, "source").ok_or_else(|| {
            ImportError::MissingAttribute("Aggregation requires 'source'".to_string())
        })?;
        let target = get_attr(e, "target").ok_or_else(|| {
            ImportError::MissingAttribute("Aggregation requires 'target'".to_string())
        })?;
        let source_multiplicity = get_attr(e, "sourceMultiplicity").ok_or_else(|| {
            ImportError::MissingAttribute(format!(
                "Aggregation {} -> {} requires 'sourceMultiplicity'",
                source, target
            ))
        })?;
        let target_multiplicity = get_attr(e, "targetMultiplicity").ok_or_else(|| {
            ImportError::MissingAttribute(format!(
                "Aggregation {} -> {} requires 'targetMultiplicity'",
                source, target
            ))
        })?;
        Ok(AggregationEdge {
            source,
            target,
            source_multiplicity,
            target_multiplicity,
        })
    }
}

/// Accumulator for one import pass
#[derive(Debug, Default)]
struct ModelParse {
    classes: Vec<ClassDef>,
    aggregations: Vec<AggregationEdge>,
    current: Option<ClassDef>,
}

/// Extract a named attribute value from an element
fn get_attr(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
