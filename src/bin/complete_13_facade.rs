use colored::Colorize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Unsupported target format '{0}' (expected mp4 or ogg)")]
    UnsupportedFormat(String),

    #[error("Cannot detect the codec of '{0}'")]
    UnknownSource(String),
}

// =============================================================================
// Milestone 1: The complicated framework we do not control
// =============================================================================

pub struct VideoFile {
    pub name: String,
    pub codec_type: String,
}

impl VideoFile {
    pub fn new(name: &str) -> Result<Self, ConvertError> {
        let codec_type = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| ConvertError::UnknownSource(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            codec_type,
        })
    }
}

pub trait Codec {
    fn name(&self) -> &'static str;
    fn extension(&self) -> &'static str;
}

pub struct Mpeg4CompressionCodec;

impl Codec for Mpeg4CompressionCodec {
    fn name(&self) -> &'static str {
        "mpeg4"
    }

    fn extension(&self) -> &'static str {
        "mp4"
    }
}

pub struct OggCompressionCodec;

impl Codec for OggCompressionCodec {
    fn name(&self) -> &'static str {
        "ogg"
    }

    fn extension(&self) -> &'static str {
        "ogg"
    }
}

pub struct CodecFactory;

impl CodecFactory {
    pub fn extract(file: &VideoFile) -> Result<Box<dyn Codec>, ConvertError> {
        match file.codec_type.as_str() {
            "mp4" => Ok(Box::new(Mpeg4CompressionCodec)),
            "ogg" => Ok(Box::new(OggCompressionCodec)),
            _ => Err(ConvertError::UnknownSource(file.name.clone())),
        }
    }
}

pub struct Buffer {
    pub source: String,
    pub codec: &'static str,
}

pub struct BitrateReader;

impl BitrateReader {
    pub fn read(file: &VideoFile, codec: &dyn Codec) -> Buffer {
        Buffer {
            source: file.name.clone(),
            codec: codec.name(),
        }
    }

    pub fn convert(buffer: Buffer, codec: &dyn Codec) -> Buffer {
        Buffer {
            source: buffer.source,
            codec: codec.name(),
        }
    }
}

pub struct AudioMixer;

impl AudioMixer {
    pub fn fix(buffer: Buffer) -> Buffer {
        buffer
    }
}

// =============================================================================
// Milestone 2: The facade
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub name: String,
    pub steps: Vec<String>,
}

/// One call instead of half a dozen framework classes.
pub struct VideoConverter;

impl VideoConverter {
    pub fn convert(&self, filename: &str, format: &str) -> Result<ConvertedFile, ConvertError> {
        let destination: Box<dyn Codec> = match format {
            "mp4" => Box::new(Mpeg4CompressionCodec),
            "ogg" => Box::new(OggCompressionCodec),
            other => return Err(ConvertError::UnsupportedFormat(other.to_string())),
        };

        let file = VideoFile::new(filename)?;
        let source = CodecFactory::extract(&file)?;
        let mut steps = vec![format!("VideoFile: opened {}", file.name)];
        steps.push(format!("CodecFactory: extracted {} codec", source.name()));

        let buffer = BitrateReader::read(&file, source.as_ref());
        steps.push(format!("BitrateReader: read {} with {}", buffer.source, buffer.codec));

        let buffer = BitrateReader::convert(buffer, destination.as_ref());
        steps.push(format!("BitrateReader: converted to {}", buffer.codec));

        let buffer = AudioMixer::fix(buffer);
        steps.push("AudioMixer: fixed audio".to_string());

        let stem = Path::new(&buffer.source)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&buffer.source);
        Ok(ConvertedFile {
            name: format!("{stem}.{}", destination.extension()),
            steps,
        })
    }
}

fn main() {
    let converter = VideoConverter;
    for (file, format) in [("funny-cats-video.ogg", "mp4"), ("lecture.mp4", "avi")] {
        match converter.convert(file, format) {
            Ok(converted) => {
                for step in &converted.steps {
                    println!("{step}");
                }
                println!("{} {}", "saved".green(), converted.name);
            }
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ogg_to_mp4() {
        let converted = VideoConverter.convert("funny-cats-video.ogg", "mp4").unwrap();
        assert_eq!(converted.name, "funny-cats-video.mp4");
        assert_eq!(converted.steps.len(), 5);
        assert_eq!(converted.steps[1], "CodecFactory: extracted ogg codec");
        assert_eq!(converted.steps[3], "BitrateReader: converted to mpeg4");
    }

    #[test]
    fn test_mp4_to_ogg() {
        let converted = VideoConverter.convert("talk.MP4", "ogg").unwrap();
        assert_eq!(converted.name, "talk.ogg");
    }

    #[test]
    fn test_unsupported_target_format() {
        assert_eq!(
            VideoConverter.convert("a.ogg", "avi"),
            Err(ConvertError::UnsupportedFormat("avi".to_string()))
        );
    }

    #[test]
    fn test_unknown_source_codec() {
        assert!(matches!(
            VideoConverter.convert("noextension", "mp4"),
            Err(ConvertError::UnknownSource(_))
        ));
        assert!(matches!(
            VideoConverter.convert("clip.mkv", "mp4"),
            Err(ConvertError::UnknownSource(_))
        ));
    }
}
