use super::JsValue;
use std::fmt;
use std::rc::Rc;

type Callable = dyn Fn(&JsValue, &[JsValue]) -> JsValue;

/// A callable value.
///
/// Invoked with a receiver (`this`) and a slice of arguments. Clones share
/// the same underlying closure, so identity survives cloning.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    call: Rc<Callable>,
}

impl Function {
    pub fn new<F>(call: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsValue + 'static,
    {
        Self {
            name: None,
            call: Rc::new(call),
        }
    }

    pub fn named<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsValue + 'static,
    {
        Self {
            name: Some(name.into()),
            call: Rc::new(call),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> JsValue {
        (self.call)(this, args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }

    /// A function that always runs with `scope` as `this`, with `args`
    /// placed in front of the arguments it is called with.
    ///
    /// # Examples
    ///
    /// ```
    /// use esui_util::{Function, JsValue};
    ///
    /// let greet = Function::new(|this, args| {
    ///     let name = this.get("name").to_js_string();
    ///     let words: Vec<String> = args.iter().map(JsValue::to_js_string).collect();
    ///     JsValue::from(format!("{}: {}", name, words.join(" ")))
    /// });
    /// let scope = JsValue::from(serde_json::json!({"name": "ann"}));
    /// let bound = greet.bind(scope, vec![JsValue::from("hello")]);
    ///
    /// let out = bound.call(&JsValue::Undefined, &[JsValue::from("there")]);
    /// assert_eq!(out, JsValue::from("ann: hello there"));
    /// ```
    pub fn bind(&self, scope: JsValue, args: Vec<JsValue>) -> Function {
        let target = self.clone();
        let mut bound = Function::new(move |_this, rest| {
            if args.is_empty() {
                target.call(&scope, rest)
            } else {
                target.call(&scope, &prepend(&args, rest))
            }
        });
        bound.name = self.name.clone();
        bound
    }

    /// A function with `args` placed in front of its arguments. The caller's
    /// `this` is passed through.
    pub fn curry(&self, args: Vec<JsValue>) -> Function {
        let target = self.clone();
        let mut curried = Function::new(move |this, rest| target.call(this, &prepend(&args, rest)));
        curried.name = self.name.clone();
        curried
    }
}

fn prepend(head: &[JsValue], rest: &[JsValue]) -> Vec<JsValue> {
    let mut all = Vec::with_capacity(head.len() + rest.len());
    all.extend_from_slice(head);
    all.extend_from_slice(rest);
    all
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[Function: {}]", name),
            None => f.write_str("[Function (anonymous)]"),
        }
    }
}
