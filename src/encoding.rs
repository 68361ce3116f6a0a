//! Text encodings accepted for wordlists.
//!
//! Labels resolve through `encoding_rs` (the WHATWG label set: `cp1252`,
//! `utf-16le`, `koi8-r`, ...). `latin-1` and `ascii` keep their strict ISO
//! meanings instead of the WHATWG alias to windows-1252.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{Decoder, DecoderResult};

use crate::error::MaskError;

/// Treatment of a leading byte order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    /// Decode it like any other char (U+FEFF).
    Keep,
    /// Drop the encoding's own BOM.
    Strip,
    /// Drop any UTF-8/UTF-16 BOM and switch to the encoding it names.
    Sniff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
    /// 7-bit ASCII; any byte above 0x7F is invalid.
    Ascii,
    Codec {
        codec: &'static encoding_rs::Encoding,
        bom: Bom,
    },
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::utf8()
    }
}

impl Encoding {
    pub fn utf8() -> Self {
        Encoding::Codec {
            codec: encoding_rs::UTF_8,
            bom: Bom::Keep,
        }
    }

    /// Canonical label, as shown in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Latin1 => "latin-1",
            Encoding::Ascii => "ascii",
            Encoding::Codec { codec, bom: Bom::Strip } if codec == encoding_rs::UTF_8 => "utf-8-sig",
            Encoding::Codec { codec, .. } => codec.name(),
        }
    }

    /// Fresh streaming decoder for one input.
    pub fn decoder(self) -> TextDecoder {
        match self {
            Encoding::Latin1 => TextDecoder::Latin1,
            Encoding::Ascii => TextDecoder::Ascii,
            Encoding::Codec { codec, bom } => TextDecoder::Codec(match bom {
                Bom::Keep => codec.new_decoder_without_bom_handling(),
                Bom::Strip => codec.new_decoder_with_bom_removal(),
                Bom::Sniff => codec.new_decoder(),
            }),
        }
    }
}

impl FromStr for Encoding {
    type Err = MaskError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        let resolved = |codec, bom| Ok(Encoding::Codec { codec, bom });
        match normalized.as_str() {
            "utf-8" | "utf8" | "u8" => resolved(encoding_rs::UTF_8, Bom::Keep),
            "utf-8-sig" | "utf8-sig" => resolved(encoding_rs::UTF_8, Bom::Strip),
            "utf-16" | "utf16" => resolved(encoding_rs::UTF_16LE, Bom::Sniff),
            "utf-16-le" | "utf-16le" | "utf16le" => resolved(encoding_rs::UTF_16LE, Bom::Keep),
            "utf-16-be" | "utf-16be" | "utf16be" => resolved(encoding_rs::UTF_16BE, Bom::Keep),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Encoding::Latin1),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
                Some(found) if found != encoding_rs::REPLACEMENT => resolved(found, Bom::Keep),
                _ => Err(MaskError::UnknownEncoding(label.to_string())),
            },
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Incremental decoder state for one input stream.
pub enum TextDecoder {
    Latin1,
    Ascii,
    Codec(Decoder),
}

impl TextDecoder {
    /// Decode `src` onto the end of `dst`. `last` marks the end of input.
    ///
    /// On invalid input returns the index in `src` where the bad sequence
    /// starts (0 when it began in an earlier chunk).
    pub fn decode(&mut self, src: &[u8], last: bool, dst: &mut String) -> Result<(), usize> {
        match self {
            TextDecoder::Latin1 => {
                dst.extend(src.iter().map(|&b| b as char));
                Ok(())
            }
            TextDecoder::Ascii => {
                let valid = src.iter().position(|b| !b.is_ascii());
                let end = valid.unwrap_or(src.len());
                dst.extend(src[..end].iter().map(|&b| b as char));
                valid.map_or(Ok(()), Err)
            }
            TextDecoder::Codec(decoder) => {
                let mut read = 0;
                loop {
                    let needed = decoder
                        .max_utf8_buffer_length_without_replacement(src.len() - read)
                        .unwrap_or(src.len() - read)
                        .max(4);
                    dst.reserve(needed);
                    let (result, consumed) =
                        decoder.decode_to_string_without_replacement(&src[read..], dst, last);
                    read += consumed;
                    match result {
                        DecoderResult::InputEmpty => return Ok(()),
                        DecoderResult::OutputFull => continue,
                        DecoderResult::Malformed(bad, after) => {
                            return Err(read.saturating_sub(after as usize + bad as usize))
                        }
                    }
                }
            }
        }
    }
}
