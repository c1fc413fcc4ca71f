use std::path::{Path, PathBuf};

use crate::error::{Result, SpendError};
use crate::models::UserProfile;

const FILE_SUFFIX: &str = "_user_data.txt";

const KEY_NAME: &str = "name";
const KEY_EMAIL: &str = "email";
const KEY_PICTURE: &str = "profilePictureUri";
const KEY_MOBILE: &str = "mobileNumber";

/// On-disk profile records: one `<mobile>_user_data.txt` per user, one
/// `key=value` per line. Any update rewrites the whole file; the format
/// is the external contract, so no other layout is accepted.
pub struct ProfileStore {
    dir: PathBuf,
}

fn validate_mobile(mobile: &str) -> Result<()> {
    if mobile.is_empty() {
        return Err(SpendError::Profile("mobile number is empty".to_string()));
    }
    if !mobile.chars().all(|c| c.is_ascii_digit() || c == '+') {
        return Err(SpendError::Profile(format!(
            "mobile number '{mobile}' may only contain digits and '+'"
        )));
    }
    Ok(())
}

impl ProfileStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.join("profiles"),
        }
    }

    fn path_for(&self, mobile: &str) -> PathBuf {
        self.dir.join(format!("{mobile}{FILE_SUFFIX}"))
    }

    pub fn exists(&self, mobile: &str) -> bool {
        self.path_for(mobile).exists()
    }

    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        validate_mobile(&profile.mobile_number)?;
        std::fs::create_dir_all(&self.dir)?;
        let content = format!(
            "{KEY_NAME}={}\n{KEY_EMAIL}={}\n{KEY_PICTURE}={}\n{KEY_MOBILE}={}\n",
            profile.name, profile.email, profile.profile_picture_uri, profile.mobile_number
        );
        std::fs::write(self.path_for(&profile.mobile_number), content)?;
        Ok(())
    }

    /// A missing record is the "new user" outcome, not an error.
    pub fn load(&self, mobile: &str) -> Result<Option<UserProfile>> {
        validate_mobile(mobile)?;
        let path = self.path_for(mobile);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let mut profile = UserProfile {
            mobile_number: mobile.to_string(),
            name: String::new(),
            email: String::new(),
            profile_picture_uri: String::new(),
        };
        for line in content.lines() {
            // Lines without '=' are ignored
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key {
                KEY_NAME => profile.name = value.to_string(),
                KEY_EMAIL => profile.email = value.to_string(),
                KEY_PICTURE => profile.profile_picture_uri = value.to_string(),
                KEY_MOBILE => profile.mobile_number = value.to_string(),
                _ => {}
            }
        }
        Ok(Some(profile))
    }

    /// Partial update: only the provided fields change. Returns the stored
    /// record, or `None` when no such user exists.
    pub fn update(
        &self,
        mobile: &str,
        name: Option<&str>,
        email: Option<&str>,
        picture: Option<&str>,
    ) -> Result<Option<UserProfile>> {
        let Some(mut profile) = self.load(mobile)? else {
            return Ok(None);
        };
        if let Some(name) = name {
            profile.name = name.to_string();
        }
        if let Some(email) = email {
            profile.email = email.to_string();
        }
        if let Some(picture) = picture {
            profile.profile_picture_uri = picture.to_string();
        }
        self.save(&profile)?;
        Ok(Some(profile))
    }

    /// Returns whether a record was actually removed.
    pub fn delete(&self, mobile: &str) -> Result<bool> {
        validate_mobile(mobile)?;
        let path = self.path_for(mobile);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }

    /// Number of stored profile records.
    pub fn count(&self) -> usize {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return 0;
        };
        entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .ends_with(FILE_SUFFIX)
            })
            .count()
    }
}
