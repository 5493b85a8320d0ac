mod dev_import_base;

pub use dev_import_base::DevImportBase;
