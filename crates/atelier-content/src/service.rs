use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use atelier_assets::{check_upload, AssetRole, AssetStore, Upload};
use atelier_backup::{BackupFile, BackupWriter};
use atelier_store::{
    generate_id, ArticleStore, FsDocumentStore, GalleryStore, ProjectStore, StoreError,
};
use atelier_types::{
    slugify, Article, ArticleDraft, Gallery, GalleryItem, GalleryItemDraft, Project, ProjectDraft,
    Timestamp,
};

use crate::config::ContentConfig;
use crate::error::ContentResult;

/// Filename written and removed while probing whether the root is writable.
const WRITE_PROBE: &str = ".write-probe";

/// The content layer behind a request handler.
///
/// [`ContentService::open`] is the one-shot, idempotent startup
/// initialization: it creates the directory layout and probes writability
/// once, instead of re-checking a global flag on every request. After that
/// every operation is stateless -- whatever a request needs is re-read from
/// storage, and correctness under concurrent requests reduces to the record
/// store's documented last-write-wins overwrite semantics.
pub struct ContentService {
    config: ContentConfig,
    read_only: bool,
    articles: ArticleStore,
    galleries: GalleryStore,
    projects: ProjectStore,
    assets: AssetStore,
}

impl ContentService {
    /// Open the content root, creating the layout if needed.
    ///
    /// A root that turns out not to be writable (the read-only serverless
    /// case) does not fail startup: the service comes up read-only and every
    /// write operation reports `Unavailable` to its caller.
    pub fn open(config: ContentConfig) -> ContentResult<Self> {
        let read_only = config.read_only || !probe_writable(&config.root);
        if read_only && !config.read_only {
            warn!(root = %config.root.display(), "content root is not writable; running read-only");
        }

        let docs = Arc::new(FsDocumentStore::open(config.articles_dir(), read_only)?);
        let articles = ArticleStore::new(docs);
        let galleries =
            GalleryStore::with_capacity(config.galleries_dir(), config.gallery_capacity, read_only)?;
        let projects = ProjectStore::open(config.projects_file(), read_only)?;
        let assets = AssetStore::open(config.assets_dir(), config.media_base.clone(), read_only)?;

        info!(root = %config.root.display(), read_only, "content service initialized");
        Ok(Self {
            config,
            read_only,
            articles,
            galleries,
            projects,
            assets,
        })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Whether the service came up read-only (configured or detected).
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn articles(&self) -> &ArticleStore {
        &self.articles
    }

    pub fn galleries(&self) -> &GalleryStore {
        &self.galleries
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    // ---- Articles ----

    /// Validate and persist a new article, storing the cover upload (if any)
    /// against the article's id first.
    pub fn create_article(
        &self,
        draft: ArticleDraft,
        cover: Option<&Upload>,
    ) -> ContentResult<Article> {
        draft.validate()?;
        let now = Timestamp::now();
        let id = generate_id(&draft.title, &now);
        let cover_ref = match cover {
            Some(upload) => Some(self.assets.store(&id, AssetRole::Cover, upload)?),
            None => None,
        };
        let article = Article {
            slug: slugify(&draft.title),
            id,
            title: draft.title,
            subtitle: draft.subtitle,
            body: draft.body,
            tags: draft.tags,
            cover: cover_ref,
            created_at: now.clone(),
            updated_at: now,
        };
        match self.articles.save(&article) {
            Ok(()) => {
                info!(id = %article.id, "article created");
                Ok(article)
            }
            Err(e) => {
                self.discard_assets(&article.id);
                Err(e.into())
            }
        }
    }

    /// Full-record overwrite of an existing article.
    ///
    /// The id, slug, and `created_at` never change, even when the title
    /// does. Replacing the cover deletes the previously owned asset files
    /// so the manifest stays exact, but only after the replacement upload
    /// has passed the allow-list: a rejected cover leaves the old one
    /// untouched.
    pub fn update_article(
        &self,
        id: &str,
        draft: ArticleDraft,
        new_cover: Option<&Upload>,
    ) -> ContentResult<Article> {
        draft.validate()?;
        let mut article = self.articles.load(id)?;
        if let Some(upload) = new_cover {
            check_upload(upload)?;
            self.assets.delete(id)?;
            article.cover = Some(self.assets.store(id, AssetRole::Cover, upload)?);
        }
        article.title = draft.title;
        article.subtitle = draft.subtitle;
        article.body = draft.body;
        article.tags = draft.tags;
        article.updated_at = Timestamp::now();
        self.articles.save(&article)?;
        info!(id = %article.id, "article updated");
        Ok(article)
    }

    /// Delete an article and every asset it owns.
    pub fn delete_article(&self, id: &str) -> ContentResult<()> {
        if !self.articles.delete(id)? {
            return Err(StoreError::NotFound(id.to_string()).into());
        }
        self.assets.delete(id)?;
        info!(id = %id, "article deleted");
        Ok(())
    }

    // ---- Galleries ----

    /// Validate and add an item to a gallery: full image plus thumbnail.
    ///
    /// The capacity check runs before any asset byte is written; if the
    /// final insert still fails, the just-stored assets are cleaned up
    /// rather than left orphaned.
    pub fn add_gallery_item(
        &self,
        gallery_id: &str,
        draft: GalleryItemDraft,
        image: &Upload,
        thumb: &Upload,
    ) -> ContentResult<Gallery> {
        draft.validate()?;
        let gallery = self.galleries.load(gallery_id)?;
        if gallery.len() >= self.galleries.capacity() {
            return Err(StoreError::CapacityExceeded {
                gallery: gallery_id.to_string(),
                capacity: self.galleries.capacity(),
            }
            .into());
        }

        let now = Timestamp::now();
        let item_id = generate_id(&draft.title, &now);
        let image_ref = self.assets.store(&item_id, AssetRole::Full, image)?;
        let thumb_ref = match self.assets.store(&item_id, AssetRole::Thumb, thumb) {
            Ok(asset) => asset,
            Err(e) => {
                self.discard_assets(&item_id);
                return Err(e.into());
            }
        };

        let item = GalleryItem {
            id: item_id.clone(),
            title: draft.title,
            image: image_ref,
            thumb: thumb_ref,
            tags: draft.tags,
            created_at: now,
        };
        match self.galleries.add_item(gallery_id, item) {
            Ok(gallery) => {
                info!(gallery = %gallery_id, item = %item_id, "gallery item added");
                Ok(gallery)
            }
            Err(e) => {
                self.discard_assets(&item_id);
                Err(e.into())
            }
        }
    }

    /// Remove a gallery item and the asset files it owns.
    pub fn remove_gallery_item(
        &self,
        gallery_id: &str,
        item_id: &str,
    ) -> ContentResult<GalleryItem> {
        let removed = self.galleries.remove_item(gallery_id, item_id)?;
        self.assets.delete(&removed.id)?;
        info!(gallery = %gallery_id, item = %item_id, "gallery item removed");
        Ok(removed)
    }

    // ---- Projects ----

    /// Validate and add a project to the collection, storing its images
    /// against the project's slug id.
    pub fn create_project(&self, draft: ProjectDraft, images: &[Upload]) -> ContentResult<Project> {
        draft.validate()?;
        let id = slugify(&draft.title);
        match self.projects.load(&id) {
            Ok(_) => return Err(StoreError::Duplicate(id).into()),
            Err(StoreError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let mut image_refs = Vec::with_capacity(images.len());
        for upload in images {
            match self.assets.store(&id, AssetRole::Full, upload) {
                Ok(asset) => image_refs.push(asset),
                Err(e) => {
                    self.discard_assets(&id);
                    return Err(e.into());
                }
            }
        }

        let project = Project {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            images: image_refs,
            created_at: Timestamp::now(),
        };
        match self.projects.insert(project.clone()) {
            Ok(()) => {
                info!(id = %project.id, "project created");
                Ok(project)
            }
            Err(e) => {
                self.discard_assets(&id);
                Err(e.into())
            }
        }
    }

    /// Delete a project and every asset it owns.
    pub fn delete_project(&self, id: &str) -> ContentResult<Project> {
        let removed = self.projects.remove(id)?;
        self.assets.delete(id)?;
        info!(id = %id, "project deleted");
        Ok(removed)
    }

    // ---- Backup ----

    /// Export the whole content tree (records plus assets) as a ZIP archive
    /// with a generated restoration README.
    pub fn export_backup(&self, out_path: &Path) -> ContentResult<BackupFile> {
        let mut writer = BackupWriter::new();
        writer.add_tree("records", &self.config.records_dir());
        writer.add_tree("assets", &self.config.assets_dir());
        let backup = writer.finish(out_path)?;
        info!(path = %backup.path.display(), entries = backup.entry_count, "backup exported");
        Ok(backup)
    }

    /// Best-effort cleanup of assets stored during a failed composite write.
    fn discard_assets(&self, owner_id: &str) {
        if let Err(e) = self.assets.delete(owner_id) {
            warn!(owner = %owner_id, error = %e, "failed to clean up assets after aborted write");
        }
    }
}

/// Probe whether `root` is writable by creating it and writing a marker
/// file. Safe to run on every startup; the marker is removed immediately.
fn probe_writable(root: &Path) -> bool {
    if fs::create_dir_all(root).is_err() {
        return false;
    }
    let probe = root.join(WRITE_PROBE);
    if fs::write(&probe, b"probe").is_err() {
        return false;
    }
    let _ = fs::remove_file(&probe);
    true
}
