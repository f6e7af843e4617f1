use std::sync::Arc;

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use wirekit_core_rs::*;

const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Species {
  Cat = 0,
  SeaOtter = 1,
}

impl WireEnum for Species {
  const TYPE_NAME: &'static str = "Species";

  fn members() -> &'static [EnumMember<Self>] {
    const MEMBERS: &[EnumMember<Species>] = &[
      EnumMember::new("Cat", Species::Cat),
      EnumMember::with_wire_name("SeaOtter", "sea-otter", Species::SeaOtter),
    ];
    MEMBERS
  }

  fn bits(self) -> u64 {
    self as u64
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Traits(u32);

impl Traits {
  const FRIENDLY: Traits = Traits(1);
  const NOCTURNAL: Traits = Traits(2);
  const AQUATIC: Traits = Traits(4);
}

impl WireEnum for Traits {
  const TYPE_NAME: &'static str = "Traits";
  const IS_FLAGS: bool = true;

  fn members() -> &'static [EnumMember<Self>] {
    const MEMBERS: &[EnumMember<Traits>] = &[
      EnumMember::new("Friendly", Traits::FRIENDLY),
      EnumMember::with_wire_name("Nocturnal", "night-owl", Traits::NOCTURNAL),
      EnumMember::new("Aquatic", Traits::AQUATIC),
    ];
    MEMBERS
  }

  fn bits(self) -> u64 {
    u64::from(self.0)
  }

  fn from_bits(bits: u64) -> Option<Self> {
    u32::try_from(bits).ok().map(Traits)
  }
}

#[derive(Debug, Clone, PartialEq)]
struct Toy {
  label: String,
}

impl Parsable for Toy {
  fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
    writer.write_string_value(Some("label"), Some(&self.label))
  }
}

fn create_toy(node: &dyn ParseNode) -> Result<Toy, SerializationError> {
  let label = node
    .get_child_node("label")
    .and_then(|node| node.get_string_value())
    .ok_or_else(|| SerializationError::custom("label is required"))?;
  Ok(Toy { label })
}

#[derive(Debug, Clone, PartialEq)]
struct Pet {
  name: String,
  age: Option<i64>,
  species: Option<Species>,
  traits: Option<Traits>,
  toys: Vec<Toy>,
}

impl Parsable for Pet {
  fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
    writer.write_string_value(Some("name"), Some(&self.name))?;
    writer.write_i64_value(Some("age"), self.age)?;
    writer.write_enum_value(Some("species"), self.species)?;
    writer.write_enum_value(Some("traits"), self.traits)?;
    let toys = self.toys.iter().map(|toy| toy as &dyn Parsable).collect::<Vec<_>>();
    writer.write_collection_of_object_values(Some("toys"), &toys)
  }
}

fn create_pet(node: &dyn ParseNode) -> Result<Pet, SerializationError> {
  let name = node
    .get_child_node("name")
    .and_then(|node| node.get_string_value())
    .ok_or_else(|| SerializationError::custom("name is required"))?;
  let toys = match node.get_child_node("toys") {
    Some(toys) => toys.get_collection_of_object_values(create_toy)?,
    None => Vec::new(),
  };
  Ok(Pet {
    name,
    age: node.get_child_node("age").and_then(|node| node.get_i64_value()),
    species: node.get_child_node("species").and_then(|node| node.get_enum_value()),
    traits: node.get_child_node("traits").and_then(|node| node.get_enum_value()),
    toys,
  })
}

#[derive(Default)]
struct JsonWriter {
  hooks: WriterHooks,
  open: Vec<Value>,
  root: Option<Value>,
}

impl JsonWriter {
  fn put(&mut self, key: Option<&str>, value: Value) {
    match (self.open.last_mut(), key) {
      (Some(Value::Object(map)), Some(key)) => {
        map.insert(key.to_string(), value);
      }
      (Some(Value::Array(items)), _) => items.push(value),
      _ => self.root = Some(value),
    }
  }

  fn put_optional<T: Into<Value>>(&mut self, key: Option<&str>, value: Option<T>) -> Result<(), SerializationError> {
    if let Some(value) = value {
      self.put(key, value.into());
    }
    Ok(())
  }
}

impl SerializationWriter for JsonWriter {
  fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), SerializationError> {
    self.put_optional(key, value)
  }

  fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), SerializationError> {
    self.put_optional(key, value)
  }

  fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), SerializationError> {
    self.put_optional(key, value)
  }

  fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), SerializationError> {
    self.put_optional(key, value)
  }

  fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
    self.put(key, Value::Null);
    Ok(())
  }

  fn write_collection_of_string_values(&mut self, key: Option<&str>, values: &[String]) -> Result<(), SerializationError> {
    self.put(key, Value::from(values.to_vec()));
    Ok(())
  }

  fn write_object_value(&mut self, key: Option<&str>, value: &dyn Parsable) -> Result<(), SerializationError> {
    write_object_with_hooks(
      self,
      value,
      |writer| {
        writer.open.push(Value::Object(Map::new()));
        Ok(())
      },
      |writer| {
        let object = writer.open.pop().unwrap_or(Value::Null);
        writer.put(key, object);
        Ok(())
      },
    )
  }

  fn write_collection_of_object_values(
    &mut self,
    key: Option<&str>,
    values: &[&dyn Parsable],
  ) -> Result<(), SerializationError> {
    self.open.push(Value::Array(Vec::new()));
    for value in values {
      self.write_object_value(None, *value)?;
    }
    let items = self.open.pop().unwrap_or(Value::Null);
    self.put(key, items);
    Ok(())
  }

  fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError> {
    let root = self.root.take().unwrap_or(Value::Null);
    serde_json::to_vec(&root).map_err(|err| SerializationError::custom(err.to_string()))
  }

  fn hooks(&self) -> &WriterHooks {
    &self.hooks
  }

  fn hooks_mut(&mut self) -> &mut WriterHooks {
    &mut self.hooks
  }
}

struct JsonWriterFactory;

impl SerializationWriterFactory for JsonWriterFactory {
  fn valid_content_type(&self) -> &str {
    JSON
  }

  fn get_serialization_writer(&self, _content_type: &str) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    Ok(Box::new(JsonWriter::default()))
  }
}

struct JsonParseNode(Value);

impl ParseNode for JsonParseNode {
  fn get_string_value(&self) -> Option<String> {
    self.0.as_str().map(str::to_string)
  }

  fn get_bool_value(&self) -> Option<bool> {
    self.0.as_bool()
  }

  fn get_i64_value(&self) -> Option<i64> {
    self.0.as_i64()
  }

  fn get_f64_value(&self) -> Option<f64> {
    self.0.as_f64()
  }

  fn get_child_node(&self, identifier: &str) -> Option<Box<dyn ParseNode>> {
    self
      .0
      .get(identifier)
      .map(|child| Box::new(JsonParseNode(child.clone())) as Box<dyn ParseNode>)
  }

  fn get_collection_of_nodes(&self) -> Option<Vec<Box<dyn ParseNode>>> {
    self.0.as_array().map(|items| {
      items
        .iter()
        .map(|item| Box::new(JsonParseNode(item.clone())) as Box<dyn ParseNode>)
        .collect()
    })
  }
}

struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
  fn valid_content_type(&self) -> &str {
    JSON
  }

  fn get_root_parse_node(&self, _content_type: &str, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError> {
    let value = serde_json::from_slice(content).map_err(|err| SerializationError::custom(err.to_string()))?;
    Ok(Box::new(JsonParseNode(value)))
  }
}

fn json_serializer(writer_factory: Arc<dyn SerializationWriterFactory>) -> Serializer {
  let writers = Arc::new(SerializationWriterFactoryRegistry::new());
  writers.register_factory(writer_factory).expect("register writer");
  let readers = Arc::new(ParseNodeFactoryRegistry::new());
  readers.register_factory(Arc::new(JsonParseNodeFactory)).expect("register reader");
  Serializer::new(writers, readers, SerializerConfig::default())
}

fn sample_pet() -> Pet {
  Pet {
    name: "Mochi".to_string(),
    age: Some(3),
    species: Some(Species::SeaOtter),
    traits: Some(Traits(Traits::FRIENDLY.0 | Traits::NOCTURNAL.0)),
    toys: vec![
      Toy {
        label: "shell".to_string(),
      },
      Toy {
        label: "pebble".to_string(),
      },
    ],
  }
}

#[tokio::test]
async fn test_json_round_trip_of_single_object() {
  let serializer = json_serializer(Arc::new(JsonWriterFactory));
  let pet = sample_pet();

  let text = serializer
    .serialize_as_string_async(JSON, Some(&pet), true, &CancellationToken::new())
    .await
    .expect("serialize");
  let json: Value = serde_json::from_str(&text).expect("valid json");
  assert_eq!(json["species"], "sea-otter");
  assert_eq!(json["traits"], "Friendly,night-owl");
  assert_eq!(json["toys"][1]["label"], "pebble");

  let parsed = serializer
    .deserialize(JSON, Some(text.as_bytes()), create_pet)
    .expect("deserialize");
  assert_eq!(parsed, pet);
}

#[tokio::test]
async fn test_json_round_trip_of_collection() {
  let serializer = json_serializer(Arc::new(JsonWriterFactory));
  let mut other = sample_pet();
  other.name = "Tofu".to_string();
  other.species = Some(Species::Cat);
  other.traits = None;
  other.toys.clear();
  let pets = vec![sample_pet(), other];

  let text = serializer
    .serialize_collection_as_string_async(JSON, Some(pets.as_slice()), true, &CancellationToken::new())
    .await
    .expect("serialize");
  let parsed = serializer
    .deserialize_collection(JSON, Some(text.as_bytes()), create_pet)
    .expect("deserialize");

  assert_eq!(parsed, pets);
}

#[test]
fn test_vendor_content_type_resolves_to_json() {
  let serializer = json_serializer(Arc::new(JsonWriterFactory));
  let content_type = "application/vnd.petstore.v1+json; charset=utf-8";

  let stream = serializer.serialize_as_stream(content_type, Some(&sample_pet())).expect("serialize");
  let parsed = serializer
    .deserialize(content_type, Some(stream.get_ref().as_slice()), create_pet)
    .expect("deserialize");

  assert_eq!(parsed, sample_pet());
}

#[test]
fn test_decorated_json_writer_annotates_every_object() {
  let decorated = SerializationWriterProxyFactory::new(
    Some(Arc::new(JsonWriterFactory)),
    None,
    None,
    Some(StartObjectHook::new(|_, writer| {
      writer.write_string_value(Some("@kind"), Some("model"))
    })),
  )
  .expect("proxy");
  let serializer = json_serializer(Arc::new(decorated));

  let stream = serializer.serialize_as_stream(JSON, Some(&sample_pet())).expect("serialize");
  let json: Value = serde_json::from_slice(stream.get_ref()).expect("valid json");

  assert_eq!(json["@kind"], "model");
  assert_eq!(json["toys"][0]["@kind"], "model");
  assert_eq!(json["toys"][1]["@kind"], "model");
}
