use auth::UserClaims;
use printpdf::BuiltinFont;
use printpdf::Mm;
use printpdf::PdfDocument;

use super::errors::RenderError;

/// Renders a user's profile as a single-page A4 PDF, entirely in memory.
///
/// Uses built-in Helvetica fonts so the binary ships no font assets.
pub struct ProfileRenderer;

impl ProfileRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the profile document for the given claims.
    ///
    /// # Returns
    /// The finished PDF as raw bytes
    ///
    /// # Errors
    /// * `RenderFailed` - Font loading or document serialization failed
    pub fn render(&self, user: &UserClaims) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            format!("Profile_{}", user.last_name),
            Mm(210.0),
            Mm(297.0),
            "profile",
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::RenderFailed(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::RenderFailed(e.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer);
        layer.use_text("User Profile Information", 18.0, Mm(20.0), Mm(270.0), &bold);

        let lines = [
            format!("First Name: {}", user.first_name),
            format!("Last Name: {}", user.last_name),
            format!("Email: {}", user.email),
            format!("Date of Birth: {}", user.date_of_birth.format("%Y-%m-%d")),
        ];

        let mut y = 255.0;
        for line in lines {
            layer.use_text(line, 12.0, Mm(20.0), Mm(y), &regular);
            y -= 8.0;
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::RenderFailed(e.to_string()))
    }
}

impl Default for ProfileRenderer {
    fn default() -> Self {
        Self::new()
    }
}
