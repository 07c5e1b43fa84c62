//! Decode browser `File`s into data URLs.
//!
//! `FileReader` is callback based; the callbacks complete a oneshot channel
//! so callers can `join_all` a whole selection. Both closures stay owned by
//! the future until the reader reports, then are detached and dropped.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("file reader setup failed: {0}")]
    Setup(String),
    #[error("could not read {name}")]
    Read { name: String },
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String, ReadError>>>>>;

fn reply(tx: &Reply, result: Result<String, ReadError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// Read `file` as a `data:` URL.
///
/// # Errors
///
/// Returns `ReadError` if the reader cannot be created or the browser fails
/// to read the file.
pub async fn read_data_url(file: web_sys::File) -> Result<String, ReadError> {
    let name = file.name();
    let reader = web_sys::FileReader::new().map_err(|e| ReadError::Setup(format!("{e:?}")))?;
    let (tx, rx) = oneshot::channel();
    let tx: Reply = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        let reader = reader.clone();
        let name = name.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| ReadError::Read { name: name.clone() });
            reply(&tx, result);
        })
    };
    let onerror = {
        let tx = tx.clone();
        let name = name.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
            reply(&tx, Err(ReadError::Read { name: name.clone() }));
        })
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        reader.set_onload(None);
        reader.set_onerror(None);
        return Err(ReadError::Setup(format!("{e:?}")));
    }

    let result = rx.await.unwrap_or_else(|_| Err(ReadError::Read { name }));
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(onload);
    drop(onerror);
    result
}

/// Copy the entries of a `FileList` into a vector.
#[must_use]
pub fn files_of(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
