//! Дерево тегов: [`Tag`] и корневой [`NamedTag`].
//!
//! Имя тега хранится не в самом теге, а там, где тег стоит: ключом в
//! [`Compound`] или полем `name` корневого [`NamedTag`]. Элементы [`List`]
//! имён не имеют.

use super::{Compound, List, NbtString, TagKind};

/// Значение одного тега.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tag {
    /// Маркер конца `Compound`; в дереве встречается только как элемент
    /// пустого списка вида `End` или как пустой корень.
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(NbtString),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
        }
    }

    pub fn id(&self) -> u8 {
        self.kind().id()
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

impl TagKind {
    /// Нулевое значение вида: числа равны 0, строки и массивы пусты,
    /// список имеет вид `End`, `Compound` не содержит записей.
    pub fn zero_value(self) -> Tag {
        match self {
            TagKind::End => Tag::End,
            TagKind::Byte => Tag::Byte(0),
            TagKind::Short => Tag::Short(0),
            TagKind::Int => Tag::Int(0),
            TagKind::Long => Tag::Long(0),
            TagKind::Float => Tag::Float(0.0),
            TagKind::Double => Tag::Double(0.0),
            TagKind::ByteArray => Tag::ByteArray(Vec::new()),
            TagKind::String => Tag::String(NbtString::new()),
            TagKind::List => Tag::List(List::default()),
            TagKind::Compound => Tag::Compound(Compound::new()),
            TagKind::IntArray => Tag::IntArray(Vec::new()),
        }
    }
}

/// Создаёт тег нулевого значения по идентификатору вида.
///
/// Возвращает `None` для идентификатора вне `0..=11`.
pub fn construct(id: u8) -> Option<Tag> {
    TagKind::from_id(id).map(TagKind::zero_value)
}

/// Корневой тег вместе с именем.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedTag {
    pub name: NbtString,
    pub tag: Tag,
}

impl NamedTag {
    pub fn new(
        name: impl Into<NbtString>,
        tag: impl Into<Tag>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    pub fn kind(&self) -> TagKind {
        self.tag.kind()
    }

    pub fn into_tag(self) -> Tag {
        self.tag
    }

    /// Корень-`Compound`, если корень им является.
    pub fn compound(&self) -> Option<&Compound> {
        self.tag.as_compound()
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(v: $ty) -> Self {
                    Tag::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<u8> => ByteArray,
    Vec<i32> => IntArray,
    NbtString => String,
    List => List,
    Compound => Compound,
}

impl From<bool> for Tag {
    fn from(v: bool) -> Self {
        Tag::Byte(v as i8)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::String(NbtString::from(s))
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::String(NbtString::from(s))
    }
}
