//! Descriptor XML output.
//!
//! Produces the `Description.xml` document World Creator reads for a texture:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <WorldCreator Version="2.0">
//!   <Textures Preview="X1_Preview.png" Tags="a b" Description="Foo(X1)" Publisher="..." Website="..." Guid="...">
//!     <Diffuse File="Foo_albedo.png" Time="..."/>
//!     <Normal File="Foo_normal.png" Time="..."/>
//!     <Displacement File="Foo_disp.png" Time="..."/>
//!   </Textures>
//! </WorldCreator>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::config::ConverterConfig;
use crate::error::{Q2wcError, Result};
use crate::types::{MapRole, OutputDescriptor};

const ROOT_ELEMENT: &str = "WorldCreator";
const TEXTURES_ELEMENT: &str = "Textures";

/// Render the descriptor document for the asset in `dir`.
///
/// Fails with `MissingField` if any of the three required maps was not
/// resolved. `dir` is only used for error reporting.
pub fn render_xml(descriptor: &OutputDescriptor, dir: &Path, config: &ConverterConfig) -> Result<String> {
    let mut files = Vec::with_capacity(MapRole::ALL.len());
    for role in MapRole::ALL {
        files.push((role, descriptor.require_map(role, dir)?));
    }

    let time = descriptor.time.to_string();
    let xml_err = |e: std::io::Error| Q2wcError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to render XML: {}", e),
    };

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_err)?;

    let root = BytesStart::new(ROOT_ELEMENT).with_attributes([("Version", config.wc_version.as_str())]);
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    let textures = BytesStart::new(TEXTURES_ELEMENT).with_attributes([
        ("Preview", descriptor.preview.as_str()),
        ("Tags", descriptor.taglist.as_str()),
        ("Description", descriptor.desc.as_str()),
        ("Publisher", config.publisher.as_str()),
        ("Website", config.website.as_str()),
        ("Guid", descriptor.guid.as_str()),
    ]);
    writer.write_event(Event::Start(textures)).map_err(xml_err)?;

    for (role, file) in files {
        let map = BytesStart::new(role.element()).with_attributes([("File", file), ("Time", time.as_str())]);
        writer.write_event(Event::Empty(map)).map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(TEXTURES_ELEMENT)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
        .map_err(xml_err)?;

    String::from_utf8(writer.into_inner()).map_err(|e| Q2wcError::Io {
        path: dir.to_path_buf(),
        message: format!("Rendered XML is not UTF-8: {}", e),
    })
}

/// Render and write the descriptor into `dir`, replacing any existing file.
///
/// Returns the path written.
pub fn write_xml(dir: &Path, descriptor: &OutputDescriptor, config: &ConverterConfig) -> Result<PathBuf> {
    let mut xml = render_xml(descriptor, dir, config)?;
    xml.push('\n');

    let path = dir.join(&config.descriptor_filename);
    fs::write(&path, xml).map_err(|e| Q2wcError::Io {
        path: path.clone(),
        message: format!("Failed to write XML file: {}", e),
    })?;

    debug!("wrote file: {}", path.display());
    Ok(path)
}
